//! Domain entities

pub mod otp_entry;

#[cfg(test)]
mod tests;

pub use otp_entry::OtpEntry;
