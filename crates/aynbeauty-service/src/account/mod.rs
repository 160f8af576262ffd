//! Account services — registration, login, one-time passcodes.

pub mod delivery;
pub mod otp;
pub mod service;

pub use delivery::{LogOtpDelivery, OtpDelivery};
pub use otp::OtpService;
pub use service::{AccountService, RegisterRequest};
