//! In-process OTP ledger: email -> {code, expiry}.
//!
//! The ledger is process-lifetime only: entries are lost on restart and
//! never shared across processes. It is passed to callers as an explicit
//! collaborator rather than living in a global.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rand::Rng;

/// Default validity window for an issued code.
const DEFAULT_TTL_MINUTES: i64 = 10;

/// A pending one-time code.
#[derive(Debug, Clone)]
struct OtpEntry {
    /// The 6-digit code as issued.
    code: String,
    /// Instant after which the code is no longer accepted.
    expires_at: DateTime<Utc>,
}

/// Short-lived mapping from email to a pending one-time code.
///
/// Concurrent `issue`/`verify` calls for the same email race with
/// last-write-wins semantics; a code is accepted at most once because
/// [`OtpLedger::consume`] removes the entry.
#[derive(Debug)]
pub struct OtpLedger {
    entries: DashMap<String, OtpEntry>,
    ttl: Duration,
}

impl OtpLedger {
    /// Creates a ledger with the standard 10-minute validity window.
    pub fn new() -> Self {
        Self::with_ttl(Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    /// Creates a ledger with a custom validity window.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Issues a fresh 6-digit code for `email`, overwriting any pending
    /// entry, and returns the code for delivery.
    pub fn issue(&self, email: &str) -> String {
        let code = rand::thread_rng().gen_range(100_000..=999_999).to_string();
        self.entries.insert(
            email.to_string(),
            OtpEntry {
                code: code.clone(),
                expires_at: Utc::now() + self.ttl,
            },
        );
        code
    }

    /// Checks whether `code` is the pending, unexpired code for `email`.
    ///
    /// Expiry is strict: a code is rejected only once `now > expiry`, so
    /// a check at exactly the expiry instant still passes. Verification
    /// does not remove the entry; a failed attempt leaves the pending
    /// code usable.
    pub fn verify(&self, email: &str, code: &str) -> bool {
        self.entries
            .get(email)
            .map(|entry| entry.code == code && Utc::now() <= entry.expires_at)
            .unwrap_or(false)
    }

    /// Removes the pending entry for `email` (one-time use).
    pub fn consume(&self, email: &str) {
        self.entries.remove(email);
    }
}

impl Default for OtpLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_six_digits() {
        let ledger = OtpLedger::new();
        for _ in 0..32 {
            let code = ledger.issue("a@x.com");
            assert_eq!(code.len(), 6);
            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn test_verify_then_consume_is_one_time() {
        let ledger = OtpLedger::new();
        let code = ledger.issue("a@x.com");

        assert!(ledger.verify("a@x.com", &code));
        ledger.consume("a@x.com");
        assert!(!ledger.verify("a@x.com", &code));
    }

    #[test]
    fn test_wrong_code_leaves_entry_pending() {
        let ledger = OtpLedger::new();
        let code = ledger.issue("a@x.com");

        assert!(!ledger.verify("a@x.com", "000000"));
        assert!(ledger.verify("a@x.com", &code));
    }

    #[test]
    fn test_reissue_overwrites_pending_code() {
        let ledger = OtpLedger::new();
        let first = ledger.issue("a@x.com");
        let second = ledger.issue("a@x.com");

        if first != second {
            assert!(!ledger.verify("a@x.com", &first));
        }
        assert!(ledger.verify("a@x.com", &second));
    }

    #[test]
    fn test_expired_code_rejected() {
        let ledger = OtpLedger::with_ttl(Duration::minutes(-1));
        let code = ledger.issue("a@x.com");
        assert!(!ledger.verify("a@x.com", &code));
    }

    #[test]
    fn test_unknown_email_rejected() {
        let ledger = OtpLedger::new();
        assert!(!ledger.verify("nobody@x.com", "123456"));
    }
}
