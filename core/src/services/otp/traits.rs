//! Traits for mail dispatch and clock injection

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Trait for the mail dispatch collaborator
///
/// The core never talks to SMTP directly; it hands the generated code to an
/// implementation of this trait. Dispatch failure is independent of store
/// state: a code already written to the store stays redeemable.
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Send a verification code to an address
    ///
    /// Returns a provider message identifier for logging on success.
    async fn send_code(
        &self,
        address: &str,
        code: &str,
        expiry_minutes: i64,
    ) -> Result<String, String>;
}

/// Clock abstraction so tests can control time deterministically
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
