//! # storekeep-service
//!
//! Business logic service layer for Storekeep. Each service orchestrates
//! repositories, the password hasher, the token encoder, the OTP ledger,
//! and outbound mail to implement application-level use cases.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod catalog;
pub mod context;
pub mod mail;

pub use account::AccountService;
pub use catalog::{CategoryService, ProductService};
pub use context::RequestContext;
pub use mail::Mailer;
