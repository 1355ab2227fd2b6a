//! Testing utilities for the latcrypt library
pub mod config;

pub use config::SuiteConfig;
pub use error::{Result, SuiteError};
pub use runner::{run_roundtrip_suite, SuiteReport};

use rand::Rng;

/// Draws `n` message bits, each 0 or 1.
pub fn random_message<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<u8> {
    (0..n).map(|_| rng.gen_range(0..=1u8)).collect()
}

/// Number of positions where two bit strings differ.
///
/// Positions past the end of the shorter string count as errors.
pub fn bit_errors(expected: &[u8], actual: &[u8]) -> usize {
    let differing = expected
        .iter()
        .zip(actual.iter())
        .filter(|(a, b)| a != b)
        .count();
    differing + expected.len().abs_diff(actual.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn test_bit_errors() {
        assert_eq!(bit_errors(&[0, 1, 1, 0], &[0, 1, 1, 0]), 0);
        assert_eq!(bit_errors(&[0, 1, 1, 0], &[1, 1, 0, 0]), 2);
        assert_eq!(bit_errors(&[0, 1, 1], &[0, 1]), 1);
    }

    #[test]
    fn test_random_message_is_binary() {
        let mut rng = ChaChaRng::seed_from_u64(1);
        let message = random_message(&mut rng, 256);
        assert_eq!(message.len(), 256);
        assert!(message.iter().all(|&b| b <= 1));
        assert!(message.contains(&0) && message.contains(&1));
    }
}
