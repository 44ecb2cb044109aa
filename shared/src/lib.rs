//! Shared utilities and common types for the VeriMail server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response envelope
//! - Utility functions (email validation, address masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{OtpConfig, RateLimitConfig, ServerConfig, WindowLimit};
pub use types::ApiResponse;
pub use utils::email;
