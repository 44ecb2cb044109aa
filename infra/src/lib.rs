//! # Infrastructure Layer
//!
//! Concrete implementations of the core's external collaborators.
//! Currently this is mail dispatch: an SMTP mailer (lettre) for production
//! and a mock mailer that logs codes to the console for development and
//! tests, selected by a provider factory.

pub mod config;
pub mod mail;

pub use config::MailConfig;
pub use mail::{create_mailer, Mailer, MockMailer, SmtpMailer};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Mail service setup or dispatch error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
