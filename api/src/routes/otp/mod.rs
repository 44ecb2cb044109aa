//! OTP route handlers
//!
//! Two endpoints drive the whole flow:
//! - `POST /otp/send` issues and mails a code
//! - `POST /otp/verify` redeems one

pub mod send;
pub mod verify;

use std::sync::Arc;

use ve_core::services::otp::{MailerTrait, OtpService};

/// Application state shared across handlers
pub struct AppState<M: MailerTrait> {
    pub otp_service: Arc<OtpService<M>>,
}
