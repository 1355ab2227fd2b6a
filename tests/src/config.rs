// tests/src/config.rs

use std::fs;
use std::path::Path;

use latcrypt_params::{Params, KYBER512};
use serde::Deserialize;

use crate::error::{Result, SuiteError};

/// Configuration of a statistical round-trip run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuiteConfig {
    pub params: Params,
    #[serde(default = "default_trials")]
    pub trials: usize,
    #[serde(default = "default_max_mean_bit_errors")]
    pub max_mean_bit_errors: f64,
    #[serde(default)]
    pub seed: u64,
}

fn default_trials() -> usize {
    20
}

fn default_max_mean_bit_errors() -> f64 {
    5.0
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            params: KYBER512,
            trials: default_trials(),
            max_mean_bit_errors: default_max_mean_bit_errors(),
            seed: 0,
        }
    }
}

impl SuiteConfig {
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_mean_bit_errors(mut self, bound: f64) -> Self {
        self.max_mean_bit_errors = bound;
        self
    }

    /// Parses a suite from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.trials == 0 {
            return Err(SuiteError::InvalidConfig("trials must be positive"));
        }
        Ok(config)
    }

    /// Loads a suite from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

// Predefined suites
impl SuiteConfig {
    /// Noise switched off: every trial must decrypt exactly.
    pub fn noiseless() -> Self {
        Self::default()
            .with_params(KYBER512.with_noise(0, 0))
            .with_trials(5)
            .with_max_mean_bit_errors(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let text = r#"
            [params]
            k = 2
            n = 256
            q = 3329
            eta1 = 3
            eta2 = 2
            du = 10
            dv = 4
        "#;
        let config = SuiteConfig::from_toml_str(text).unwrap();
        assert_eq!(config, SuiteConfig::default());
    }

    #[test]
    fn test_zero_trials_rejected() {
        let text = r#"
            trials = 0

            [params]
            k = 2
            n = 16
            q = 3329
            eta1 = 2
            eta2 = 2
            du = 10
            dv = 4
        "#;
        assert!(matches!(
            SuiteConfig::from_toml_str(text),
            Err(SuiteError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_params_rejected() {
        assert!(matches!(
            SuiteConfig::from_toml_str("trials = 3"),
            Err(SuiteError::Toml(_))
        ));
    }
}
