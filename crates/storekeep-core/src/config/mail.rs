//! Outbound mail configuration.
//!
//! When `username` or `password` is empty the mailer degrades to logging
//! the message locally instead of delivering it.

use serde::{Deserialize, Serialize};

/// SMTP delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP relay port (implicit TLS).
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username; empty disables delivery.
    #[serde(default)]
    pub username: String,
    /// SMTP password; empty disables delivery.
    #[serde(default)]
    pub password: String,
    /// From address for outbound messages; falls back to `username`.
    #[serde(default)]
    pub from_address: String,
}

impl MailConfig {
    /// Whether SMTP delivery is configured.
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// The effective From address.
    pub fn sender(&self) -> &str {
        if self.from_address.is_empty() {
            &self.username
        } else {
            &self.from_address
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from_address: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}
