//! One-time code entry for email-based verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default length of a generated code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default expiration time for codes (5 minutes)
pub const DEFAULT_EXPIRY_MINUTES: i64 = 5;

/// A single in-flight one-time code bound to an email address
///
/// Entries are owned exclusively by the code store: one slot per address,
/// replaced wholesale on re-issuance, deleted on any terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// Email address the code was issued for (normalized, lower-cased)
    pub address: String,

    /// The numeric code, leading zeros preserved
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpEntry {
    /// Create a new entry with a freshly generated code
    ///
    /// `now` is supplied by the caller so that expiry arithmetic stays under
    /// the injected clock.
    pub fn new(address: String, code_length: usize, expiry: Duration, now: DateTime<Utc>) -> Self {
        Self {
            address,
            code: Self::generate_code(code_length),
            issued_at: now,
            expires_at: now + expiry,
        }
    }

    /// Generate a random numeric code of exactly `length` digits
    ///
    /// Each digit is drawn independently, so the code is uniform over the
    /// full numeric range and leading zeros are as likely as any other digit.
    pub fn generate_code(length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length).map(|_| rng.gen_range(b'0'..=b'9') as char).collect()
    }

    /// Check whether the code has expired as of `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Exact string comparison against a submitted code
    ///
    /// Must stay a string comparison: `"042917"` and `"42917"` are different
    /// codes.
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted
    }

    /// Time remaining until expiration, zero if already expired
    pub fn time_until_expiry(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
