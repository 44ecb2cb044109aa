//! # VeriMail Core
//!
//! Core business logic and domain layer for the VeriMail backend.
//! This crate contains the OTP entry entity, the in-memory code store and
//! attempt limiter, the OTP service that composes them, and the domain
//! error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
