//! # aynbeauty-auth
//!
//! Authentication primitives for the AynBeauty platform.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//! - `otp` — one-time passcode generation and hashing

pub mod jwt;
pub mod otp;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use otp::OtpGenerator;
pub use password::{PasswordHasher, PasswordValidator};
