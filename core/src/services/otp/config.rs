//! Configuration for the OTP service

use ve_shared::config::{OtpConfig, RateLimitConfig};

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Code generation and expiry settings
    pub otp: OtpConfig,
    /// Fixed-window budgets for issuance and verification
    pub rate_limit: RateLimitConfig,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            otp: OtpConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl OtpServiceConfig {
    /// Load the full service configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            otp: OtpConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}
