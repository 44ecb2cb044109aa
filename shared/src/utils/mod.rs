//! Utility functions shared across server modules

pub mod email;

pub use email::{is_valid_address, mask_address, normalize_address};
