//! Axum용 인증 추출기.
//!
//! `Authorization: Bearer` 헤더의 토큰을 요청당 한 번 해석하여
//! 불변 사용자 값을 핸들러에 전달합니다. 스레드 로컬이나 전역
//! 상태는 사용하지 않습니다.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use painter_core::{PainterError, User};

use crate::error::ApiError;
use crate::state::AppState;

/// 인증된 사용자 추출기.
///
/// # 사용 예시
///
/// ```rust,ignore
/// async fn protected_handler(
///     AuthUser(user): AuthUser,
/// ) -> impl IntoResponse {
///     format!("Authenticated user: {}", user.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        // Authorization 헤더에서 토큰 추출
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                PainterError::Unauthenticated("인증 토큰이 필요합니다".to_string())
            })?;

        // Bearer 토큰 형식 확인
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            PainterError::Unauthenticated("잘못된 Authorization 헤더 형식".to_string())
        })?;

        // 토큰 검증 및 현재 사용자 해석 (요청당 1회)
        let user = state.authenticator.resolve(token).await?;

        Ok(AuthUser(user))
    }
}
