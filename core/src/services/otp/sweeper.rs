//! Background sweeping of expired codes and elapsed limiter windows
//!
//! Sweeping has no effect on correctness (`verify` and `admit` check expiry
//! independently); it bounds memory growth for addresses that never complete
//! verification.

use std::sync::Arc;

use tracing::{debug, info};

use super::limiter::FixedWindowLimiter;
use super::store::CodeStore;

/// Configuration for the background sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run a sweep cycle (in seconds)
    pub interval_seconds: u64,
    /// Whether to run the sweeper at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 60,
            enabled: true,
        }
    }
}

impl SweeperConfig {
    /// Load configuration from `SWEEP_INTERVAL_SECS` and `SWEEP_ENABLED`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            interval_seconds: std::env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(defaults.interval_seconds),
            enabled: std::env::var("SWEEP_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enabled),
        }
    }
}

/// Summary of one sweep cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Expired code entries evicted
    pub codes_evicted: usize,
    /// Elapsed limiter windows dropped
    pub windows_dropped: usize,
}

/// Periodic maintenance over the code store and attempt limiters
pub struct CodeSweeper {
    store: Arc<CodeStore>,
    limiters: Vec<Arc<FixedWindowLimiter>>,
    config: SweeperConfig,
}

impl CodeSweeper {
    /// Create a new sweeper over a store and any number of limiters
    pub fn new(
        store: Arc<CodeStore>,
        limiters: Vec<Arc<FixedWindowLimiter>>,
        config: SweeperConfig,
    ) -> Self {
        Self {
            store,
            limiters,
            config,
        }
    }

    /// Run a single sweep cycle
    pub fn run_sweep(&self) -> SweepReport {
        let codes_evicted = self.store.sweep();
        let windows_dropped = self.limiters.iter().map(|l| l.sweep()).sum();

        let report = SweepReport {
            codes_evicted,
            windows_dropped,
        };

        if report.codes_evicted > 0 || report.windows_dropped > 0 {
            info!(
                codes_evicted = report.codes_evicted,
                windows_dropped = report.windows_dropped,
                event = "sweep_completed",
                "Evicted expired verification state"
            );
        } else {
            debug!(event = "sweep_completed", "Nothing to evict");
        }

        report
    }

    /// Spawn the sweep loop on the current tokio runtime
    ///
    /// Returns immediately; the task runs for the lifetime of the process.
    /// Does nothing when disabled by configuration.
    pub fn start(self) -> Option<tokio::task::JoinHandle<()>> {
        if !self.config.enabled {
            info!("Background sweeper disabled by configuration");
            return None;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);
        info!(
            interval_seconds = self.config.interval_seconds,
            "Starting background sweeper"
        );

        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so a fresh process
            // does not sweep an empty store.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.run_sweep();
            }
        }))
    }
}
