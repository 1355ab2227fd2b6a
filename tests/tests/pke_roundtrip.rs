//! End-to-end tests for the module-lattice PKE

use latcrypt_api::Pke;
use latcrypt_params::{KYBER1024, KYBER512, KYBER768};
use latcrypt_pke::{decrypt, encrypt, keygen, ModuleLwePke};
use latcrypt_tests::{bit_errors, random_message, run_roundtrip_suite, SuiteConfig};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

const SUITE_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/kyber512.toml");

#[test]
fn test_kyber512_statistical_roundtrip() {
    let config = SuiteConfig::load(SUITE_FILE).unwrap();
    assert_eq!(config.params, KYBER512);

    let report = run_roundtrip_suite(&config).unwrap();
    assert_eq!(report.trials, 20);
    assert!(
        report.passes(&config),
        "mean bit errors {} above bound {}",
        report.mean_bit_errors(),
        config.max_mean_bit_errors
    );
}

#[test]
fn test_noiseless_roundtrip_is_exact() {
    let config = SuiteConfig::noiseless().with_seed(17);
    let report = run_roundtrip_suite(&config).unwrap();
    assert_eq!(report.total_bit_errors, 0);
    assert_eq!(report.worst_trial, 0);
}

#[test]
fn test_presets_through_trait() {
    let mut rng = ChaChaRng::seed_from_u64(31);
    for params in [KYBER512, KYBER768, KYBER1024] {
        let scheme = ModuleLwePke::new(params).unwrap();
        let (pk, sk) = scheme.keypair(&mut rng).unwrap();
        assert_eq!(pk.a.shape(), (params.k, params.k));

        let message = random_message(&mut rng, params.n);
        let ct = scheme.encrypt(&pk, &message, &mut rng).unwrap();
        let decrypted = scheme.decrypt(&sk, &ct).unwrap();
        assert!(bit_errors(&message, &decrypted) <= 5, "{}", scheme.name());
    }
}

#[test]
fn test_wrong_secret_key_garbles_message() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let (pk, _) = keygen(&KYBER512, &mut rng).unwrap();
    let (_, other_sk) = keygen(&KYBER512, &mut rng).unwrap();

    let message = random_message(&mut rng, KYBER512.n);
    let ct = encrypt(&KYBER512, &message, &pk, &mut rng).unwrap();
    let decrypted = decrypt(&other_sk, &ct).unwrap();

    // An unrelated key yields roughly half the bits wrong.
    assert!(bit_errors(&message, &decrypted) > 32);
}

#[test]
fn test_encryption_is_randomized() {
    let mut rng = ChaChaRng::seed_from_u64(6);
    let (pk, _) = keygen(&KYBER512, &mut rng).unwrap();
    let message = vec![1u8; KYBER512.n];

    let ct1 = encrypt(&KYBER512, &message, &pk, &mut rng).unwrap();
    let ct2 = encrypt(&KYBER512, &message, &pk, &mut rng).unwrap();
    assert_ne!(ct1, ct2);
}
