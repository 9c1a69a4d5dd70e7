//! Admin seed account configuration.

use serde::{Deserialize, Serialize};

/// Credentials for the one-time admin seed at startup.
///
/// The seed is skipped entirely when `email` is empty, and is a no-op
/// when a user with the configured email already exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Admin account email.
    #[serde(default)]
    pub email: String,
    /// Admin account password (hashed before storage).
    #[serde(default)]
    pub password: String,
}
