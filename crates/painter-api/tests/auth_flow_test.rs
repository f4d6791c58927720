//! 인증 플로우 통합 테스트.
//!
//! 등록 → 로그인 → 토큰 해석의 전체 플로우를 인메모리 저장소로
//! 검증합니다:
//! - 중복 등록 거부 (기존 레코드 보존)
//! - 균일한 InvalidCredentials (계정 존재 여부 비노출)
//! - 발급 토큰 수락 / 만료 토큰 거부
//! - 주체가 사라진 토큰 거부

mod common;

use chrono::{Duration, Utc};
use painter_api::auth::{create_token, Claims};
use painter_core::{PainterError, Role};

use common::{test_authenticator, TEST_SECRET};

#[tokio::test]
async fn test_duplicate_registration_fails_and_preserves_first_record() {
    let (auth, store) = test_authenticator();

    let first = auth
        .register("alice", "password1", Role::Free)
        .await
        .unwrap();
    assert_eq!(first.username, "alice");
    assert_eq!(first.role, Role::Free);

    // 같은 이름으로 두 번째 등록은 실패
    let err = auth
        .register("alice", "different-password", Role::Vip)
        .await
        .unwrap_err();
    assert!(matches!(err, PainterError::DuplicateUsername(_)));

    // 첫 번째 레코드가 덮어써지지 않음: 원래 비밀번호로 로그인 가능
    assert!(auth.login("alice", "password1").await.is_ok());
    assert!(auth.login("alice", "different-password").await.is_err());

    use painter_core::CredentialStore;
    let stored = store.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(stored.role, Role::Free);
}

#[tokio::test]
async fn test_invalid_credentials_is_uniform() {
    let (auth, _store) = test_authenticator();
    auth.register("alice", "correct-password", Role::Free)
        .await
        .unwrap();

    // 잘못된 비밀번호와 존재하지 않는 사용자가 동일한 에러 종류
    let wrong_password = auth.login("alice", "wrong").await.unwrap_err();
    let no_such_user = auth.login("nosuchuser", "x").await.unwrap_err();

    assert!(matches!(wrong_password, PainterError::InvalidCredentials));
    assert!(matches!(no_such_user, PainterError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), no_such_user.to_string());
    assert_eq!(wrong_password.code(), no_such_user.code());
}

#[tokio::test]
async fn test_login_token_round_trip() {
    let (auth, _store) = test_authenticator();
    auth.register("alice", "password1", Role::Free)
        .await
        .unwrap();

    let token = auth.login("alice", "password1").await.unwrap();
    let user = auth.resolve(&token).await.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.role, Role::Free);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let (auth, _store) = test_authenticator();
    auth.register("alice", "password1", Role::Free)
        .await
        .unwrap();

    // 만료 시각을 과거로 직접 설정한 토큰
    let now = Utc::now();
    let claims = Claims {
        sub: "alice".to_string(),
        iat: (now - Duration::hours(1)).timestamp(),
        exp: (now - Duration::minutes(5)).timestamp(),
    };
    let expired = create_token(&claims, TEST_SECRET).unwrap();

    let err = auth.resolve(&expired).await.unwrap_err();
    assert!(matches!(err, PainterError::Unauthenticated(_)));
}

#[tokio::test]
async fn test_malformed_token_is_rejected() {
    let (auth, _store) = test_authenticator();

    for token in ["", "garbage", "a.b.c"] {
        let err = auth.resolve(token).await.unwrap_err();
        assert!(matches!(err, PainterError::Unauthenticated(_)), "token: {token}");
    }
}

#[tokio::test]
async fn test_token_with_unknown_subject_is_rejected() {
    let (auth, _store) = test_authenticator();

    // 구조적으로 유효하지만 주체가 저장소에 없는 토큰
    let claims = Claims::new("ghost", 30);
    let token = create_token(&claims, TEST_SECRET).unwrap();

    let err = auth.resolve(&token).await.unwrap_err();
    assert!(matches!(err, PainterError::Unauthenticated(_)));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let (auth, _store) = test_authenticator();
    auth.register("alice", "password1", Role::Free)
        .await
        .unwrap();

    let claims = Claims::new("alice", 30);
    let forged = create_token(&claims, "attacker-controlled-secret-minimum-32ch").unwrap();

    let err = auth.resolve(&forged).await.unwrap_err();
    assert!(matches!(err, PainterError::Unauthenticated(_)));
}
