//! One-time password ledger for the password-reset flow.

pub mod ledger;

pub use ledger::OtpLedger;
