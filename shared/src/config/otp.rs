//! One-time code configuration

use serde::{Deserialize, Serialize};

/// Configuration for code generation and expiry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Number of digits in a generated code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Minutes until an issued code expires
    #[serde(default = "default_expiry_minutes")]
    pub expiry_minutes: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            expiry_minutes: default_expiry_minutes(),
        }
    }
}

impl OtpConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `OTP_CODE_LENGTH` and `OTP_EXPIRY_MINUTES`, falling back to the
    /// defaults (6 digits, 5 minutes) when unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_length: std::env::var("OTP_CODE_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&len| len >= 1)
                .unwrap_or(defaults.code_length),
            expiry_minutes: std::env::var("OTP_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&m| m > 0)
                .unwrap_or(defaults.expiry_minutes),
        }
    }
}

fn default_code_length() -> usize {
    6
}

fn default_expiry_minutes() -> i64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OtpConfig::default();
        assert_eq!(config.code_length, 6);
        assert_eq!(config.expiry_minutes, 5);
    }
}
