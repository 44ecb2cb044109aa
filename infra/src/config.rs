//! Configuration for infrastructure services

use serde::{Deserialize, Serialize};

/// Mail service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Mail provider ("smtp" or "mock")
    pub provider: String,
    /// SMTP relay host
    pub smtp_host: String,
    /// SMTP username
    pub smtp_user: String,
    /// SMTP password
    pub smtp_pass: String,
    /// From address for outgoing mail
    pub from_address: String,
    /// Display name of the platform, used in the mail subject
    pub platform_name: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            smtp_host: String::new(),
            smtp_user: String::new(),
            smtp_pass: String::new(),
            from_address: "no-reply@verimail.local".to_string(),
            platform_name: "VeriMail".to_string(),
        }
    }
}

impl MailConfig {
    /// Load mail configuration from environment variables
    ///
    /// Reads `MAIL_PROVIDER`, `SMTP_HOST`, `SMTP_USER`, `SMTP_PASS`,
    /// `MAIL_FROM_ADDRESS` and `MAIL_PLATFORM_NAME`; unset values fall back
    /// to the mock provider defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("MAIL_PROVIDER").unwrap_or(defaults.provider),
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_user: std::env::var("SMTP_USER").unwrap_or(defaults.smtp_user),
            smtp_pass: std::env::var("SMTP_PASS").unwrap_or(defaults.smtp_pass),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            platform_name: std::env::var("MAIL_PLATFORM_NAME").unwrap_or(defaults.platform_name),
        }
    }
}
