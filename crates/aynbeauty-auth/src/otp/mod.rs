//! One-time passcode generation and hashing.

pub mod generator;

pub use generator::{OtpCode, OtpGenerator};
