//! Main OTP service: composes the code store, the attempt limiters and the
//! mail dispatch collaborator behind the two public operations.

use std::sync::Arc;

use ve_shared::utils::email::{is_valid_address, mask_address, normalize_address};

use crate::errors::{DomainError, DomainResult};

use super::config::OtpServiceConfig;
use super::limiter::FixedWindowLimiter;
use super::store::{CodeStore, VerifyOutcome};
use super::traits::{Clock, MailerTrait};
use super::types::{SendCodeResult, VerifyCodeResult};

/// OTP service for issuing and verifying email-bound one-time codes
///
/// Issuance and verification are gated by two independently configured
/// fixed-window limiters, both keyed by the normalized address.
pub struct OtpService<M: MailerTrait> {
    /// Mail dispatch collaborator
    mailer: Arc<M>,
    /// Single-slot code storage
    store: Arc<CodeStore>,
    /// Budget for issuance requests
    send_limiter: Arc<FixedWindowLimiter>,
    /// Budget for verification attempts
    verify_limiter: Arc<FixedWindowLimiter>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<M: MailerTrait> OtpService<M> {
    /// Create a new OTP service
    ///
    /// The store and both limiters run on the injected clock, so tests can
    /// advance time deterministically.
    pub fn new(mailer: Arc<M>, clock: Arc<dyn Clock>, config: OtpServiceConfig) -> Self {
        let store = Arc::new(CodeStore::new(
            clock.clone(),
            config.otp.code_length,
            config.otp.expiry_minutes,
        ));
        let send_limiter = Arc::new(FixedWindowLimiter::new(clock.clone(), config.rate_limit.send));
        let verify_limiter = Arc::new(FixedWindowLimiter::new(clock, config.rate_limit.verify));

        Self {
            mailer,
            store,
            send_limiter,
            verify_limiter,
            config,
        }
    }

    /// Issue a code for an address and dispatch it by mail
    ///
    /// The code is written to the store before the mail is awaited, and no
    /// store or limiter lock is held across the dispatch. A dispatch failure
    /// therefore leaves the entry in place: a delayed delivery retry can
    /// still be redeemed, and the caller may re-issue, which overwrites it.
    pub async fn send_code(&self, address: &str) -> DomainResult<SendCodeResult> {
        let address = normalize_address(address);

        if !is_valid_address(&address) {
            tracing::debug!(
                address = %mask_address(&address),
                event = "invalid_address",
                "Rejected issuance request for malformed address"
            );
            return Err(DomainError::InvalidAddress);
        }

        if self.config.rate_limit.enabled {
            let admission = self.send_limiter.admit(&address);
            if !admission.allowed {
                let retry_after_secs = admission
                    .retry_after
                    .map(|d| d.num_seconds().max(1))
                    .unwrap_or(1);
                tracing::warn!(
                    address = %mask_address(&address),
                    retry_after_secs,
                    event = "send_rate_limited",
                    "Issuance request rate limit exceeded"
                );
                return Err(DomainError::RateLimited { retry_after_secs });
            }
        }

        let entry = self.store.issue(&address);
        let expiry_minutes = self.config.otp.expiry_minutes;

        tracing::info!(
            address = %mask_address(&address),
            event = "code_issued",
            expiry_minutes,
            "Issued new verification code"
        );

        let message_id = self
            .mailer
            .send_code(&address, &entry.code, expiry_minutes)
            .await
            .map_err(|e| {
                tracing::error!(
                    address = %mask_address(&address),
                    error = %e,
                    event = "dispatch_failed",
                    "Failed to dispatch verification mail; stored code remains redeemable"
                );
                DomainError::DispatchFailed { message: e }
            })?;

        tracing::info!(
            address = %mask_address(&address),
            message_id = %message_id,
            event = "code_dispatched",
            "Verification mail dispatched"
        );

        Ok(SendCodeResult {
            address,
            expires_at: entry.expires_at,
            expiry_minutes,
            message_id,
        })
    }

    /// Verify a submitted code for an address
    pub async fn verify_code(&self, address: &str, code: &str) -> DomainResult<VerifyCodeResult> {
        let address = normalize_address(address);
        let expected = self.config.otp.code_length;

        if code.len() != expected || !code.chars().all(|c| c.is_ascii_digit()) {
            tracing::debug!(
                address = %mask_address(&address),
                code_length = code.len(),
                event = "invalid_code_format",
                "Rejected verification request with malformed code"
            );
            return Err(DomainError::InvalidCodeFormat { expected });
        }

        if self.config.rate_limit.enabled {
            let admission = self.verify_limiter.admit(&address);
            if !admission.allowed {
                let retry_after_secs = admission
                    .retry_after
                    .map(|d| d.num_seconds().max(1))
                    .unwrap_or(1);
                tracing::warn!(
                    address = %mask_address(&address),
                    retry_after_secs,
                    event = "verify_rate_limited",
                    "Verification attempt rate limit exceeded"
                );
                return Err(DomainError::RateLimited { retry_after_secs });
            }
        }

        match self.store.verify(&address, code) {
            VerifyOutcome::Success => {
                tracing::info!(
                    address = %mask_address(&address),
                    event = "code_verified",
                    "Verification code accepted"
                );
                Ok(VerifyCodeResult { address })
            }
            VerifyOutcome::NotFound => {
                tracing::debug!(
                    address = %mask_address(&address),
                    event = "code_not_found",
                    "No code in flight for address"
                );
                Err(DomainError::CodeNotFound)
            }
            VerifyOutcome::Expired => {
                tracing::debug!(
                    address = %mask_address(&address),
                    event = "code_expired",
                    "Verification code past expiry"
                );
                Err(DomainError::CodeExpired)
            }
            VerifyOutcome::Mismatch => {
                tracing::warn!(
                    address = %mask_address(&address),
                    event = "code_mismatch",
                    "Submitted code did not match"
                );
                Err(DomainError::CodeMismatch)
            }
        }
    }

    /// Shared handle to the code store, for the sweeper
    pub fn store(&self) -> Arc<CodeStore> {
        self.store.clone()
    }

    /// Shared handles to both limiters, for the sweeper
    pub fn limiters(&self) -> (Arc<FixedWindowLimiter>, Arc<FixedWindowLimiter>) {
        (self.send_limiter.clone(), self.verify_limiter.clone())
    }
}
