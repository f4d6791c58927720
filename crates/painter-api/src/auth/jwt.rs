//! JWT 토큰 처리.
//!
//! 액세스 토큰 생성/검증 로직. 토큰은 서버가 보유한 대칭 비밀 키로
//! 서명되며, 검증은 서명과 만료만 확인합니다 (서버 측 상태 없음).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT 액세스 토큰 페이로드.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - 사용자 이름
    pub sub: String,
    /// Issued At - 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// Expiration - 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// 새로운 Claims 생성.
    ///
    /// # Arguments
    ///
    /// * `subject` - 사용자 이름
    /// * `ttl_minutes` - 만료 시간 (분)
    pub fn new(subject: impl Into<String>, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(ttl_minutes)).timestamp(),
        }
    }

    /// 토큰이 만료되었는지 확인 (엄격한 `now > exp` 검사).
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT 토큰 처리 에러.
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("토큰 인코딩 실패: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),
    #[error("토큰 디코딩 실패")]
    DecodingError,
    #[error("토큰이 만료되었습니다")]
    TokenExpired,
    #[error("잘못된 토큰 형식")]
    InvalidToken,
}

/// 액세스 토큰 생성.
///
/// # Arguments
///
/// * `claims` - JWT 페이로드
/// * `secret` - 서명 비밀 키
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(JwtError::from)
}

/// JWT 토큰 디코딩 및 검증.
///
/// 서명과 만료를 모두 확인합니다. 시계 오차(clock skew)는 보정하지
/// 않습니다: leeway 없이 `now > exp`면 거부됩니다.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        jsonwebtoken::errors::ErrorKind::InvalidToken => JwtError::InvalidToken,
        _ => JwtError::DecodingError,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-jwt-testing-minimum-32-chars";

    #[test]
    fn test_create_and_decode_token() {
        let claims = Claims::new("alice", 30);

        let token = create_token(&claims, TEST_SECRET).unwrap();
        assert!(!token.is_empty());

        let decoded = decode_token(&token, TEST_SECRET).unwrap();
        assert_eq!(decoded.sub, "alice");
        assert_eq!(decoded.exp, claims.exp);
        assert!(!decoded.is_expired());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // 만료 시각을 과거로 직접 설정
        let now = Utc::now();
        let claims = Claims {
            sub: "alice".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        assert!(claims.is_expired());

        let token = create_token(&claims, TEST_SECRET).unwrap();
        let result = decode_token(&token, TEST_SECRET);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_malformed_token() {
        assert!(decode_token("not.a.token", TEST_SECRET).is_err());
        assert!(decode_token("", TEST_SECRET).is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let claims = Claims::new("alice", 30);
        let token = create_token(&claims, TEST_SECRET).unwrap();

        let result = decode_token(&token, "wrong-secret-key-for-testing-minimum-32-chars");
        assert!(result.is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let claims = Claims::new("alice", 30);
        let token = create_token(&claims, TEST_SECRET).unwrap();

        // 페이로드 일부를 변조
        let mut tampered = token.clone();
        let mid = tampered.len() / 2;
        tampered.replace_range(mid..mid + 1, if &token[mid..mid + 1] == "a" { "b" } else { "a" });

        assert!(decode_token(&tampered, TEST_SECRET).is_err());
    }
}
