use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /otp/send
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Email address to issue a code for
    ///
    /// Bounds only; the exact `local@domain.tld` pattern is enforced by the
    /// domain layer so both entry points agree.
    #[validate(length(min = 3, max = 254))]
    pub address: String,
}

/// Request body for POST /otp/verify
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// Email address the code was issued for
    #[validate(length(min = 3, max = 254))]
    pub address: String,

    /// Submitted one-time code; exact digit count is checked by the domain
    /// layer against the configured length
    #[validate(length(min = 1, max = 32))]
    pub code: String,
}

/// Success payload for POST /otp/send
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    /// Normalized address the code was sent to
    pub address: String,
    /// Minutes until the code expires
    pub expires_in_minutes: i64,
}

/// Success payload for POST /otp/verify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    /// Normalized address that was verified
    pub address: String,
}
