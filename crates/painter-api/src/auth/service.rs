//! 인증 오케스트레이션.
//!
//! 로그인(자격증명 검증 → 토큰 발급)과 요청 인증(토큰 검증 →
//! 사용자 해석)을 담당합니다. 자격증명 저장소는 명시적으로
//! 주입됩니다.

use std::sync::Arc;

use painter_core::{CredentialStore, PainterError, PainterResult, Role, User};

use super::jwt::{create_token, decode_token, Claims};
use super::password::{hash_password, verify_password};

/// JWT 서명 설정.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// 서명 비밀 키
    pub secret: String,
    /// 발급 토큰 TTL (분)
    pub ttl_minutes: i64,
}

impl JwtConfig {
    /// 새 JWT 설정 생성.
    pub fn new(secret: impl Into<String>, ttl_minutes: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_minutes,
        }
    }
}

/// 인증 서비스.
///
/// 자격증명 저장소와 JWT 설정을 보유하며, 로그인과 토큰 해석의
/// 단일 진입점입니다.
#[derive(Clone)]
pub struct Authenticator {
    credentials: Arc<dyn CredentialStore>,
    jwt: JwtConfig,
}

impl Authenticator {
    /// 새 인증 서비스 생성.
    pub fn new(credentials: Arc<dyn CredentialStore>, jwt: JwtConfig) -> Self {
        Self { credentials, jwt }
    }

    /// 새 사용자 등록.
    ///
    /// 비밀번호를 해싱한 뒤 저장소의 조건부 삽입에 위임합니다.
    ///
    /// # Errors
    ///
    /// 이미 등록된 사용자 이름이면 `DuplicateUsername`.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> PainterResult<User> {
        let password_hash =
            hash_password(password).map_err(|e| PainterError::Internal(e.to_string()))?;

        self.credentials
            .register(username, &password_hash, role)
            .await
    }

    /// 로그인: 자격증명을 검증하고 액세스 토큰을 발급합니다.
    ///
    /// 존재하지 않는 사용자와 잘못된 비밀번호 모두 동일한
    /// `InvalidCredentials`로 실패합니다. 계정 존재 여부가
    /// 노출되지 않도록 하는 보안 속성입니다.
    pub async fn login(&self, username: &str, password: &str) -> PainterResult<String> {
        let user = self
            .credentials
            .find_by_username(username)
            .await?
            .ok_or(PainterError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)
            .map_err(|_| PainterError::InvalidCredentials)?;

        let claims = Claims::new(&user.username, self.jwt.ttl_minutes);
        create_token(&claims, &self.jwt.secret)
            .map_err(|e| PainterError::Internal(e.to_string()))
    }

    /// 토큰을 검증하고 현재 사용자 레코드를 해석합니다.
    ///
    /// 서명/만료 검증 후 토큰 주체로 저장소를 다시 조회합니다.
    /// 구조적으로 유효한 토큰이라도 주체가 더 이상 존재하지 않으면
    /// `Unauthenticated`입니다.
    pub async fn resolve(&self, token: &str) -> PainterResult<User> {
        let claims = decode_token(token, &self.jwt.secret)
            .map_err(|e| PainterError::Unauthenticated(e.to_string()))?;

        self.credentials
            .find_by_username(&claims.sub)
            .await?
            .ok_or_else(|| {
                PainterError::Unauthenticated("토큰 주체가 존재하지 않습니다".to_string())
            })
    }
}
