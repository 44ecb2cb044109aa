//! Types for OTP service results

use chrono::{DateTime, Utc};

/// Result of issuing and dispatching a code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// Normalized address the code was sent to
    pub address: String,
    /// When the issued code expires
    pub expires_at: DateTime<Utc>,
    /// Expiry window in minutes, for the response payload
    pub expiry_minutes: i64,
    /// Provider message identifier from the mailer
    pub message_id: String,
}

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerifyCodeResult {
    /// Normalized address that was verified
    pub address: String,
}
