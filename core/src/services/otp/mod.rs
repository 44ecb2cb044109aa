//! OTP service module for email-based verification
//!
//! This module provides the complete one-time code workflow:
//! - Code generation and single-slot storage with expiry
//! - Fixed-window rate limiting for issuance and verification
//! - Composition of both behind two operations, `send_code` and
//!   `verify_code`, with mail dispatch through an injected collaborator
//! - Background sweeping of expired entries

mod config;
mod limiter;
mod service;
mod store;
mod sweeper;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use limiter::{Admission, FixedWindowLimiter};
pub use service::OtpService;
pub use store::{CodeStore, VerifyOutcome};
pub use sweeper::{CodeSweeper, SweepReport, SweeperConfig};
pub use traits::{Clock, MailerTrait, SystemClock};
pub use types::{SendCodeResult, VerifyCodeResult};
