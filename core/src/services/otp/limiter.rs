//! Fixed-window attempt limiter

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use ve_shared::config::WindowLimit;

use super::traits::Clock;

/// Result of an admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    /// Whether the attempt was admitted
    pub allowed: bool,
    /// Time until the window resets, present only on denial
    pub retry_after: Option<Duration>,
}

impl Admission {
    fn allowed() -> Self {
        Self {
            allowed: true,
            retry_after: None,
        }
    }

    fn denied(retry_after: Duration) -> Self {
        Self {
            allowed: false,
            retry_after: Some(retry_after),
        }
    }
}

/// A sliding counter with a fixed reset boundary
#[derive(Debug, Clone)]
struct WindowRecord {
    attempts: u32,
    window_resets_at: DateTime<Utc>,
}

/// Fixed-window rate limiter keyed by an arbitrary string
///
/// Counts attempts within a window that resets wholesale at a fixed
/// boundary. Adjacent windows can admit up to twice the budget at the
/// boundary; callers needing strict bounds should use a sliding log or
/// token bucket instead. Check-then-increment runs under one lock
/// acquisition, so the counter never exceeds the budget while an attempt is
/// being admitted.
pub struct FixedWindowLimiter {
    records: Mutex<HashMap<String, WindowRecord>>,
    clock: Arc<dyn Clock>,
    max_attempts: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    /// Create a limiter with a per-key budget of `max_attempts` per window
    pub fn new(clock: Arc<dyn Clock>, limit: WindowLimit) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            clock,
            max_attempts: limit.max_attempts,
            window: Duration::seconds(limit.window_seconds as i64),
        }
    }

    /// Admit or deny one attempt for `key`
    pub fn admit(&self, key: &str) -> Admission {
        let now = self.clock.now();
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());

        match records.get_mut(key) {
            // Window elapsed: replace the record wholesale
            Some(record) if now > record.window_resets_at => {
                record.attempts = 1;
                record.window_resets_at = now + self.window;
                Admission::allowed()
            }
            Some(record) if record.attempts < self.max_attempts => {
                record.attempts += 1;
                Admission::allowed()
            }
            Some(record) => Admission::denied(record.window_resets_at - now),
            None => {
                records.insert(
                    key.to_string(),
                    WindowRecord {
                        attempts: 1,
                        window_resets_at: now + self.window,
                    },
                );
                Admission::allowed()
            }
        }
    }

    /// Drop records whose window has elapsed, returning the eviction count
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let before = records.len();
        records.retain(|_, record| now <= record.window_resets_at);
        before - records.len()
    }

    /// Number of keys currently tracked
    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether no keys are tracked
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
