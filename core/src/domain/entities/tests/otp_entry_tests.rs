use chrono::{Duration, Utc};
use std::collections::HashSet;

use crate::domain::entities::otp_entry::{OtpEntry, DEFAULT_CODE_LENGTH};

#[test]
fn test_new_entry() {
    let now = Utc::now();
    let entry = OtpEntry::new(
        "alice@example.com".to_string(),
        DEFAULT_CODE_LENGTH,
        Duration::minutes(5),
        now,
    );

    assert_eq!(entry.address, "alice@example.com");
    assert_eq!(entry.code.len(), DEFAULT_CODE_LENGTH);
    assert_eq!(entry.issued_at, now);
    assert_eq!(entry.expires_at, now + Duration::minutes(5));
    assert!(!entry.is_expired(now));
}

#[test]
fn test_generate_code_format() {
    for length in [1usize, 4, 6, 8] {
        for _ in 0..100 {
            let code = OtpEntry::generate_code(length);
            assert_eq!(code.len(), length);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}

#[test]
fn test_generate_code_preserves_leading_zeros() {
    // With 2000 single-digit draws the probability of never seeing a zero
    // in the first position is (9/10)^2000, effectively zero.
    let leading_zero_seen = (0..2000)
        .map(|_| OtpEntry::generate_code(6))
        .any(|code| code.starts_with('0'));
    assert!(leading_zero_seen);
}

#[test]
fn test_code_uniqueness() {
    let codes: HashSet<String> = (0..100).map(|_| OtpEntry::generate_code(6)).collect();
    assert!(codes.len() > 1);
}

#[test]
fn test_is_expired_boundary() {
    let now = Utc::now();
    let entry = OtpEntry::new("a@b.com".to_string(), 6, Duration::minutes(5), now);

    // Not expired at exactly expires_at, expired one instant after
    assert!(!entry.is_expired(entry.expires_at));
    assert!(entry.is_expired(entry.expires_at + Duration::milliseconds(1)));
}

#[test]
fn test_matches_is_exact_string_comparison() {
    let now = Utc::now();
    let mut entry = OtpEntry::new("a@b.com".to_string(), 6, Duration::minutes(5), now);
    entry.code = "042917".to_string();

    assert!(entry.matches("042917"));
    assert!(!entry.matches("42917"));
    assert!(!entry.matches("042918"));
}

#[test]
fn test_time_until_expiry() {
    let now = Utc::now();
    let entry = OtpEntry::new("a@b.com".to_string(), 6, Duration::minutes(5), now);

    assert_eq!(entry.time_until_expiry(now), Duration::minutes(5));
    assert_eq!(
        entry.time_until_expiry(now + Duration::minutes(10)),
        Duration::zero()
    );
}

#[test]
fn test_serialization_round_trip() {
    let now = Utc::now();
    let entry = OtpEntry::new("a@b.com".to_string(), 6, Duration::minutes(5), now);

    let json = serde_json::to_string(&entry).unwrap();
    let deserialized: OtpEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(entry, deserialized);
}
