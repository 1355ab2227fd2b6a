// pke/src/kyber/scheme.rs

//! Scheme object implementing `api::Pke`.

use latcrypt_api::error::{Error as ApiError, Result as ApiResult};
use latcrypt_api::Pke;
use latcrypt_params::{Params, KYBER1024, KYBER512, KYBER768};
use rand::{CryptoRng, RngCore};

use super::cpa_pke::{self, check_params, check_secret_key};
use super::keys::{Ciphertext, PublicKey, SecretKey};
use crate::error::Result;

/// Module-LWE PKE bound to one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleLwePke {
    params: Params,
}

impl ModuleLwePke {
    /// Binds the scheme to validated parameters.
    pub fn new(params: Params) -> Result<Self> {
        check_params(&params)?;
        Ok(Self { params })
    }

    /// The parameter set in use
    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl Pke for ModuleLwePke {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type Ciphertext = Ciphertext;

    fn name(&self) -> &'static str {
        match self.params {
            p if p == KYBER512 => "Kyber-512-CPA-PKE",
            p if p == KYBER768 => "Kyber-768-CPA-PKE",
            p if p == KYBER1024 => "Kyber-1024-CPA-PKE",
            _ => "Module-LWE-CPA-PKE",
        }
    }

    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        cpa_pke::keygen(&self.params, rng).map_err(ApiError::from)
    }

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        pk_recipient: &Self::PublicKey,
        message: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        cpa_pke::encrypt(&self.params, message, pk_recipient, rng).map_err(ApiError::from)
    }

    fn decrypt(
        &self,
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Vec<u8>> {
        check_secret_key(&self.params, sk_recipient)?;
        cpa_pke::decrypt(sk_recipient, ciphertext).map_err(ApiError::from)
    }
}
