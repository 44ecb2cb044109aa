//! Mail dispatch module
//!
//! Implementations of the core's `MailerTrait`:
//!
//! - **SMTP**: production dispatch over an async lettre transport
//! - **Mock**: logs codes to the console and records them for tests

pub mod mock_mailer;
pub mod smtp_mailer;


use async_trait::async_trait;

use ve_core::services::otp::MailerTrait;

use crate::config::MailConfig;
use crate::InfrastructureError;

pub use mock_mailer::MockMailer;
pub use smtp_mailer::SmtpMailer;

/// Mailer selected by configuration
///
/// A single concrete type so the generic `OtpService<M>` can be wired from a
/// runtime provider choice.
pub enum Mailer {
    Smtp(SmtpMailer),
    Mock(MockMailer),
}

#[async_trait]
impl MailerTrait for Mailer {
    async fn send_code(
        &self,
        address: &str,
        code: &str,
        expiry_minutes: i64,
    ) -> Result<String, String> {
        match self {
            Mailer::Smtp(mailer) => mailer.send_code(address, code, expiry_minutes).await,
            Mailer::Mock(mailer) => mailer.send_code(address, code, expiry_minutes).await,
        }
    }
}

/// Create a mailer based on configuration
///
/// Unknown providers fall back to the mock mailer with a warning, so a
/// misconfigured development environment still starts.
pub fn create_mailer(config: &MailConfig) -> Result<Mailer, InfrastructureError> {
    match config.provider.as_str() {
        "smtp" => {
            let mailer = SmtpMailer::new(config)
                .map_err(|e| InfrastructureError::Mail(e.to_string()))?;
            Ok(Mailer::Smtp(mailer))
        }
        "mock" => Ok(Mailer::Mock(MockMailer::new())),
        other => {
            tracing::warn!(
                provider = other,
                "Unknown mail provider, falling back to mock mailer"
            );
            Ok(Mailer::Mock(MockMailer::new()))
        }
    }
}
