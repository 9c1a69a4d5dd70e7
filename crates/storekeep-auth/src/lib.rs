//! # storekeep-auth
//!
//! Authentication primitives for Storekeep: JWT encoding/decoding,
//! Argon2id password hashing, and the in-process OTP ledger used by the
//! password-reset flow.

pub mod jwt;
pub mod otp;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use otp::OtpLedger;
pub use password::PasswordHasher;
