use std::sync::Arc;

use chrono::Duration;

use ve_shared::config::{OtpConfig, RateLimitConfig, WindowLimit};

use crate::errors::DomainError;
use crate::services::otp::config::OtpServiceConfig;
use crate::services::otp::service::OtpService;

use super::mocks::{MockClock, MockMailer};

fn test_config() -> OtpServiceConfig {
    OtpServiceConfig {
        otp: OtpConfig {
            code_length: 6,
            expiry_minutes: 5,
        },
        rate_limit: RateLimitConfig {
            enabled: true,
            send: WindowLimit {
                max_attempts: 3,
                window_seconds: 900,
            },
            verify: WindowLimit {
                max_attempts: 5,
                window_seconds: 900,
            },
        },
    }
}

fn service() -> (OtpService<MockMailer>, Arc<MockMailer>, Arc<MockClock>) {
    let mailer = MockMailer::new();
    let clock = MockClock::new();
    let service = OtpService::new(mailer.clone(), clock.clone(), test_config());
    (service, mailer, clock)
}

#[tokio::test]
async fn test_send_then_verify_succeeds_once() {
    let (service, mailer, _clock) = service();

    let result = service.send_code("alice@example.com").await.unwrap();
    assert_eq!(result.address, "alice@example.com");
    assert_eq!(result.expiry_minutes, 5);

    let code = mailer.last_code_for("alice@example.com").unwrap();
    assert_eq!(code.len(), 6);

    let verified = service.verify_code("alice@example.com", &code).await.unwrap();
    assert_eq!(verified.address, "alice@example.com");

    // Single use: the same code is gone now
    let err = service
        .verify_code("alice@example.com", &code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::CodeNotFound));
}

#[tokio::test]
async fn test_invalid_address_rejected_before_any_side_effect() {
    let (service, mailer, _clock) = service();

    let err = service.send_code("not-an-address").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidAddress));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_address_is_normalized_for_store_and_mail() {
    let (service, mailer, _clock) = service();

    let result = service.send_code("  Alice@Example.COM ").await.unwrap();
    assert_eq!(result.address, "alice@example.com");

    // Verification under any casing of the same address reaches the slot
    let code = mailer.last_code_for("alice@example.com").unwrap();
    assert!(service.verify_code("ALICE@example.com", &code).await.is_ok());
}

#[tokio::test]
async fn test_invalid_code_format_rejected() {
    let (service, mailer, _clock) = service();
    service.send_code("alice@example.com").await.unwrap();
    let code = mailer.last_code_for("alice@example.com").unwrap();

    for bad in ["12345", "1234567", "12345a", "", "042 91"] {
        let err = service
            .verify_code("alice@example.com", bad)
            .await
            .unwrap_err();
        assert!(
            matches!(err, DomainError::InvalidCodeFormat { expected: 6 }),
            "{:?} should be a format error",
            bad
        );
    }

    // Format rejections did not consume the entry
    assert!(service.verify_code("alice@example.com", &code).await.is_ok());
}

#[tokio::test]
async fn test_expired_code_reports_expired_then_not_found() {
    let (service, mailer, clock) = service();
    service.send_code("alice@example.com").await.unwrap();
    let code = mailer.last_code_for("alice@example.com").unwrap();

    clock.advance(Duration::minutes(5) + Duration::seconds(1));

    let err = service
        .verify_code("alice@example.com", &code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::CodeExpired));

    // Expiry consumed the entry
    let err = service
        .verify_code("alice@example.com", &code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::CodeNotFound));
}

#[tokio::test]
async fn test_mismatch_leaves_code_redeemable() {
    let (service, mailer, _clock) = service();
    service.send_code("alice@example.com").await.unwrap();
    let code = mailer.last_code_for("alice@example.com").unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    let err = service
        .verify_code("alice@example.com", wrong)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::CodeMismatch));

    assert!(service.verify_code("alice@example.com", &code).await.is_ok());
}

#[tokio::test]
async fn test_reissue_invalidates_previous_code() {
    let (service, mailer, _clock) = service();

    service.send_code("alice@example.com").await.unwrap();
    let first = mailer.last_code_for("alice@example.com").unwrap();
    service.send_code("alice@example.com").await.unwrap();
    let second = mailer.last_code_for("alice@example.com").unwrap();

    if first != second {
        let err = service
            .verify_code("alice@example.com", &first)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CodeMismatch));
    }
    assert!(service.verify_code("alice@example.com", &second).await.is_ok());
}

#[tokio::test]
async fn test_send_rate_limit() {
    let (service, _mailer, clock) = service();

    for _ in 0..3 {
        service.send_code("alice@example.com").await.unwrap();
    }
    let err = service.send_code("alice@example.com").await.unwrap_err();
    match err {
        DomainError::RateLimited { retry_after_secs } => {
            assert!(retry_after_secs > 0 && retry_after_secs <= 900);
        }
        other => panic!("expected RateLimited, got {:?}", other),
    }

    // Other addresses are unaffected
    assert!(service.send_code("bob@example.com").await.is_ok());

    // After the window elapses the budget resets
    clock.advance(Duration::seconds(901));
    assert!(service.send_code("alice@example.com").await.is_ok());
}

#[tokio::test]
async fn test_verify_rate_limit_allows_more_attempts_than_send() {
    let (service, mailer, _clock) = service();
    service.send_code("alice@example.com").await.unwrap();
    let code = mailer.last_code_for("alice@example.com").unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    // Burn the full verification budget on mismatches
    for _ in 0..5 {
        let err = service
            .verify_code("alice@example.com", wrong)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CodeMismatch));
    }

    // The 6th attempt is denied even with the correct code
    let err = service
        .verify_code("alice@example.com", &code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::RateLimited { .. }));
}

#[tokio::test]
async fn test_rate_limiting_can_be_disabled() {
    let mailer = MockMailer::new();
    let clock = MockClock::new();
    let mut config = test_config();
    config.rate_limit.enabled = false;
    let service = OtpService::new(mailer, clock, config);

    for _ in 0..20 {
        service.send_code("alice@example.com").await.unwrap();
    }
}

#[tokio::test]
async fn test_dispatch_failure_leaves_code_redeemable() {
    let (service, mailer, _clock) = service();

    mailer.fail_next();
    let err = service.send_code("alice@example.com").await.unwrap_err();
    assert!(matches!(err, DomainError::DispatchFailed { .. }));
    assert!(mailer.sent().is_empty());

    // The entry was written before dispatch; a re-issue overwrites it and
    // the newly mailed code verifies.
    service.send_code("alice@example.com").await.unwrap();
    let code = mailer.last_code_for("alice@example.com").unwrap();
    assert!(service.verify_code("alice@example.com", &code).await.is_ok());
}

#[tokio::test]
async fn test_mail_carries_expiry_minutes() {
    let (service, mailer, _clock) = service();
    service.send_code("alice@example.com").await.unwrap();

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].expiry_minutes, 5);
    assert_eq!(sent[0].address, "alice@example.com");
}
