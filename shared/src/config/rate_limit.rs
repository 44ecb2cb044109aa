//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

/// A fixed-window attempt budget
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct WindowLimit {
    /// Maximum attempts admitted inside one window
    pub max_attempts: u32,

    /// Window length in seconds
    pub window_seconds: u64,
}

/// Rate limiting configuration
///
/// Issuance and verification are limited by two independent fixed-window
/// counters. Verification allows more attempts than issuance, since a
/// legitimate user may mistype a code.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Budget for code issuance, per address
    pub send: WindowLimit,

    /// Budget for verification attempts, per address
    pub verify: WindowLimit,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            send: WindowLimit {
                max_attempts: 3,
                window_seconds: 900,
            },
            verify: WindowLimit {
                max_attempts: 5,
                window_seconds: 900,
            },
        }
    }
}

impl RateLimitConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `RATE_LIMIT_ENABLED`, `RATE_LIMIT_SEND_MAX`,
    /// `RATE_LIMIT_SEND_WINDOW_SECS`, `RATE_LIMIT_VERIFY_MAX` and
    /// `RATE_LIMIT_VERIFY_WINDOW_SECS`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: std::env::var("RATE_LIMIT_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enabled),
            send: WindowLimit {
                max_attempts: env_u32("RATE_LIMIT_SEND_MAX", defaults.send.max_attempts),
                window_seconds: env_u64(
                    "RATE_LIMIT_SEND_WINDOW_SECS",
                    defaults.send.window_seconds,
                ),
            },
            verify: WindowLimit {
                max_attempts: env_u32("RATE_LIMIT_VERIFY_MAX", defaults.verify.max_attempts),
                window_seconds: env_u64(
                    "RATE_LIMIT_VERIFY_WINDOW_SECS",
                    defaults.verify.window_seconds,
                ),
            },
        }
    }

    /// Create a development configuration (more lenient limits)
    pub fn development() -> Self {
        Self {
            enabled: true,
            send: WindowLimit {
                max_attempts: 30,
                window_seconds: 900,
            },
            verify: WindowLimit {
                max_attempts: 50,
                window_seconds: 900,
            },
        }
    }

    /// Create a production configuration (default limits)
    pub fn production() -> Self {
        Self::default()
    }
}

fn env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn default_enabled() -> bool {
    true
}
