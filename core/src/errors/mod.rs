//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors for the OTP workflow
///
/// Every failure a caller can observe is one of these variants; none of them
/// is fatal to the process, and none of them carries internal state such as
/// the stored code.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid email address")]
    InvalidAddress,

    #[error("Verification code must be exactly {expected} digits")]
    InvalidCodeFormat { expected: usize },

    #[error("Too many requests. Please try again in {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: i64 },

    #[error("No verification code found for this address. Please request a new code")]
    CodeNotFound,

    #[error("Verification code has expired. Please request a new code")]
    CodeExpired,

    #[error("Incorrect verification code")]
    CodeMismatch,

    #[error("Failed to send verification email. Please try again later")]
    DispatchFailed { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::InvalidAddress => "INVALID_ADDRESS",
            DomainError::InvalidCodeFormat { .. } => "INVALID_CODE_FORMAT",
            DomainError::RateLimited { .. } => "RATE_LIMITED",
            DomainError::CodeNotFound => "NOT_FOUND",
            DomainError::CodeExpired => "EXPIRED",
            DomainError::CodeMismatch => "MISMATCH",
            DomainError::DispatchFailed { .. } => "DISPATCH_FAILED",
            DomainError::Internal { .. } => "INTERNAL",
        }
    }

    /// Whether the error is a routine, expected outcome of the flow
    ///
    /// Routine errors are surfaced to the caller but not logged as errors;
    /// only dispatch and internal failures need operator visibility.
    pub fn is_routine(&self) -> bool {
        !matches!(
            self,
            DomainError::DispatchFailed { .. } | DomainError::Internal { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(DomainError::InvalidAddress.error_code(), "INVALID_ADDRESS");
        assert_eq!(DomainError::CodeNotFound.error_code(), "NOT_FOUND");
        assert_eq!(DomainError::CodeExpired.error_code(), "EXPIRED");
        assert_eq!(DomainError::CodeMismatch.error_code(), "MISMATCH");
        assert_eq!(
            DomainError::RateLimited { retry_after_secs: 30 }.error_code(),
            "RATE_LIMITED"
        );
    }

    #[test]
    fn test_routine_errors_are_not_operator_facing() {
        assert!(DomainError::CodeMismatch.is_routine());
        assert!(DomainError::RateLimited { retry_after_secs: 1 }.is_routine());
        assert!(!DomainError::DispatchFailed {
            message: "smtp down".to_string()
        }
        .is_routine());
        assert!(!DomainError::Internal {
            message: "oops".to_string()
        }
        .is_routine());
    }

    #[test]
    fn test_messages_never_leak_internals() {
        let err = DomainError::DispatchFailed {
            message: "connection refused to smtp.internal:25".to_string(),
        };
        assert!(!err.to_string().contains("smtp.internal"));
    }
}
