//! Request and response data transfer objects

pub mod otp;

pub use otp::{SendCodeRequest, SendCodeResponse, VerifyCodeRequest, VerifyCodeResponse};
