//! In-memory code store: one slot per address, lazy expiry eviction

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Duration;

use crate::domain::entities::OtpEntry;

use super::traits::Clock;

/// Tagged outcome of a verification attempt
///
/// Every terminal outcome (`Success`, `Expired`) deletes the entry;
/// `Mismatch` keeps it so the caller may retry within the remaining window
/// and attempt budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Code matched; entry consumed
    Success,
    /// No entry for this address
    NotFound,
    /// Entry existed but was past its expiry; entry deleted
    Expired,
    /// Code did not match; entry retained
    Mismatch,
}

/// In-memory association between an address and its currently valid code
///
/// The store owns its entries exclusively. All operations take the lock for
/// their full duration and never await while holding it, so compare-and-delete
/// in [`verify`](CodeStore::verify) is atomic: at most one concurrent caller
/// can observe `Success` for a given code.
pub struct CodeStore {
    entries: Mutex<HashMap<String, OtpEntry>>,
    clock: Arc<dyn Clock>,
    code_length: usize,
    expiry: Duration,
}

impl CodeStore {
    /// Create an empty store
    ///
    /// `code_length` must be at least 1.
    pub fn new(clock: Arc<dyn Clock>, code_length: usize, expiry_minutes: i64) -> Self {
        debug_assert!(code_length >= 1);
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
            code_length,
            expiry: Duration::minutes(expiry_minutes),
        }
    }

    /// Issue a fresh code for an address, replacing any existing entry
    ///
    /// Returns a copy of the stored entry; the caller is responsible for
    /// delivering its code out-of-band. Always succeeds.
    pub fn issue(&self, address: &str) -> OtpEntry {
        let now = self.clock.now();
        let entry = OtpEntry::new(address.to_string(), self.code_length, self.expiry, now);

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let replaced = entries.insert(address.to_string(), entry.clone()).is_some();
        drop(entries);

        if replaced {
            tracing::debug!(event = "code_replaced", "Previous code invalidated by re-issuance");
        }
        entry
    }

    /// Verify a submitted code against the stored entry
    ///
    /// Comparison is exact string equality so leading zeros validate
    /// correctly. The lookup, expiry check, comparison and deletion all
    /// happen under one lock acquisition.
    pub fn verify(&self, address: &str, submitted: &str) -> VerifyOutcome {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        let Some(entry) = entries.get(address) else {
            return VerifyOutcome::NotFound;
        };

        if entry.is_expired(now) {
            entries.remove(address);
            return VerifyOutcome::Expired;
        }

        if !entry.matches(submitted) {
            return VerifyOutcome::Mismatch;
        }

        entries.remove(address);
        VerifyOutcome::Success
    }

    /// Delete every expired entry, returning the eviction count
    ///
    /// Pure housekeeping: `verify` checks expiry independently, so sweeping
    /// only bounds memory growth for addresses that never complete
    /// verification.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Number of in-flight entries
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
