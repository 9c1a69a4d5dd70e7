//! Account lifecycle: registration, login, password flows, admin seed.

pub mod service;

pub use service::{AccountService, RegisterAccount};
