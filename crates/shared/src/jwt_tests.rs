//! Unit tests for session token handling.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::Claims;
use crate::jwt::{JwtConfig, JwtError, JwtService};

fn create_test_service() -> JwtService {
    JwtService::new(JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        session_expires_secs: 3600,
    })
}

#[test]
fn test_claims_new_sets_correct_fields() {
    let user_id = Uuid::new_v4();
    let session_id = Uuid::new_v4();
    let expires_at = Utc::now() + Duration::hours(1);

    let claims = Claims::new(user_id, session_id, "student", expires_at);

    assert_eq!(claims.user_id(), user_id);
    assert_eq!(claims.session_id(), session_id);
    assert_eq!(claims.username, "student");
    assert!(claims.iat <= Utc::now().timestamp());
    assert_eq!(claims.exp, expires_at.timestamp());
}

#[test]
fn test_generate_and_validate_session_token() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();
    let session_id = Uuid::new_v4();

    let issued = service
        .generate_session_token(user_id, session_id, "student")
        .unwrap();
    assert!(!issued.token.is_empty());
    assert!(issued.expires_at > Utc::now());

    let claims = service.validate_token(&issued.token).unwrap();
    assert_eq!(claims.user_id(), user_id);
    assert_eq!(claims.session_id(), session_id);
    assert_eq!(claims.username, "student");
}

#[test]
fn test_invalid_token() {
    let service = create_test_service();
    let result = service.validate_token("invalid.token.here");
    assert!(matches!(result, Err(JwtError::DecodingError(_))));
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let other = JwtService::new(JwtConfig {
        secret: "another-secret".to_string(),
        session_expires_secs: 3600,
    });
    let issued = other
        .generate_session_token(Uuid::new_v4(), Uuid::new_v4(), "student")
        .unwrap();

    assert!(create_test_service().validate_token(&issued.token).is_err());
}

#[test]
fn test_expired_token_rejected() {
    let service = JwtService::new(JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        session_expires_secs: -3600,
    });
    let issued = service
        .generate_session_token(Uuid::new_v4(), Uuid::new_v4(), "student")
        .unwrap();

    assert!(matches!(
        service.validate_token(&issued.token),
        Err(JwtError::Expired)
    ));
}

#[test]
fn test_debug_hides_secret() {
    let rendered = format!("{:?}", create_test_service());
    assert!(!rendered.contains("test-secret-key-for-testing"));
}
