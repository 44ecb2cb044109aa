//! Configuration types for the VeriMail server
//!
//! All configuration is environment-driven with sensible defaults, so the
//! server starts without any configuration in development.

pub mod otp;
pub mod rate_limit;
pub mod server;

pub use otp::OtpConfig;
pub use rate_limit::{RateLimitConfig, WindowLimit};
pub use server::ServerConfig;
