//! Business services

pub mod otp;

pub use otp::{
    Admission, Clock, CodeStore, CodeSweeper, FixedWindowLimiter, MailerTrait, OtpService,
    OtpServiceConfig, SendCodeResult, SweeperConfig, SystemClock, VerifyCodeResult, VerifyOutcome,
};
