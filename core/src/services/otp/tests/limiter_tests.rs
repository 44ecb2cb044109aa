use chrono::Duration;

use ve_shared::config::WindowLimit;

use crate::services::otp::limiter::FixedWindowLimiter;

use super::mocks::MockClock;

fn limiter(max_attempts: u32, window_seconds: u64) -> (FixedWindowLimiter, std::sync::Arc<MockClock>) {
    let clock = MockClock::new();
    let limiter = FixedWindowLimiter::new(
        clock.clone(),
        WindowLimit {
            max_attempts,
            window_seconds,
        },
    );
    (limiter, clock)
}

#[test]
fn test_exactly_max_attempts_admitted_per_window() {
    let (limiter, _clock) = limiter(5, 900);

    for i in 0..5 {
        let admission = limiter.admit("alice@example.com");
        assert!(admission.allowed, "attempt {} should be admitted", i + 1);
        assert!(admission.retry_after.is_none());
    }

    let denied = limiter.admit("alice@example.com");
    assert!(!denied.allowed);
}

#[test]
fn test_denial_reports_time_until_window_reset() {
    let (limiter, clock) = limiter(5, 900);

    for _ in 0..5 {
        limiter.admit("alice@example.com");
    }
    clock.advance(Duration::seconds(100));

    let denied = limiter.admit("alice@example.com");
    assert!(!denied.allowed);
    assert_eq!(denied.retry_after, Some(Duration::seconds(800)));
}

#[test]
fn test_window_elapse_resets_admission() {
    let (limiter, clock) = limiter(3, 60);

    for _ in 0..3 {
        assert!(limiter.admit("alice@example.com").allowed);
    }
    assert!(!limiter.admit("alice@example.com").allowed);

    clock.advance(Duration::seconds(61));

    // Fresh record: full budget again
    for _ in 0..3 {
        assert!(limiter.admit("alice@example.com").allowed);
    }
    assert!(!limiter.admit("alice@example.com").allowed);
}

#[test]
fn test_keys_are_budgeted_independently() {
    let (limiter, _clock) = limiter(1, 60);

    assert!(limiter.admit("a@example.com").allowed);
    assert!(!limiter.admit("a@example.com").allowed);
    // A different key has its own budget
    assert!(limiter.admit("b@example.com").allowed);
}

#[test]
fn test_counter_never_exceeds_budget() {
    let (limiter, _clock) = limiter(2, 60);

    let admitted = (0..10)
        .filter(|_| limiter.admit("alice@example.com").allowed)
        .count();
    assert_eq!(admitted, 2);
}

#[test]
fn test_sweep_drops_only_elapsed_windows() {
    let (limiter, clock) = limiter(3, 60);

    limiter.admit("old@example.com");
    clock.advance(Duration::seconds(45));
    limiter.admit("fresh@example.com");

    clock.advance(Duration::seconds(30));
    assert_eq!(limiter.sweep(), 1);
    assert_eq!(limiter.len(), 1);
}

#[test]
fn test_sweep_on_empty_limiter() {
    let (limiter, _clock) = limiter(3, 60);
    assert_eq!(limiter.sweep(), 0);
    assert!(limiter.is_empty());
}
