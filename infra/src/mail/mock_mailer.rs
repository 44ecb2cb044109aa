//! Mock mailer for development and tests
//!
//! Prints the code to the log instead of sending mail, and records every
//! dispatch so tests can read the code back.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use ve_core::services::otp::MailerTrait;

/// A dispatch recorded by the mock mailer
#[derive(Debug, Clone)]
pub struct MockDispatch {
    pub address: String,
    pub code: String,
    pub expiry_minutes: i64,
}

/// Console-backed mailer
#[derive(Default)]
pub struct MockMailer {
    dispatches: Mutex<Vec<MockDispatch>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All dispatches so far
    pub fn dispatches(&self) -> Vec<MockDispatch> {
        self.dispatches.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The most recent code dispatched to an address
    pub fn last_code_for(&self, address: &str) -> Option<String> {
        self.dispatches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .rev()
            .find(|d| d.address == address)
            .map(|d| d.code.clone())
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    async fn send_code(
        &self,
        address: &str,
        code: &str,
        expiry_minutes: i64,
    ) -> Result<String, String> {
        // Development convenience: the full address and code are deliberately
        // visible here, unlike every other log site.
        tracing::info!(
            address = address,
            code = code,
            expiry_minutes = expiry_minutes,
            "MOCK MAIL: verification code"
        );

        let mut dispatches = self.dispatches.lock().unwrap_or_else(|e| e.into_inner());
        dispatches.push(MockDispatch {
            address: address.to_string(),
            code: code.to_string(),
            expiry_minutes,
        });
        Ok(format!("mock-{}", Uuid::new_v4()))
    }
}
