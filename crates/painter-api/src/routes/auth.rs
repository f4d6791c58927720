//! 인증 API 라우트.
//!
//! # 엔드포인트
//!
//! - `POST /api/v1/auth/register` - 사용자 등록
//! - `POST /api/v1/auth/token` - 로그인 및 토큰 발급
//! - `GET /api/v1/auth/me` - 현재 사용자 조회

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use painter_core::{Role, UserSummary};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiErrorResponse};
use crate::state::AppState;

// ================================================================================================
// Request/Response Types
// ================================================================================================

/// 사용자 등록 요청.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// 사용자 이름 (고유)
    pub username: String,
    /// 평문 비밀번호 (해싱 후 폐기)
    pub password: String,
}

/// 로그인 요청.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// 사용자 이름
    pub username: String,
    /// 평문 비밀번호
    pub password: String,
}

/// 사용자 요약 응답 (비밀번호 해시 미포함).
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// 사용자 이름
    pub username: String,
    /// 역할 ("free" | "vip")
    pub role: String,
}

impl From<UserSummary> for UserResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            username: summary.username,
            role: summary.role.to_string(),
        }
    }
}

/// 토큰 발급 응답.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// 서명된 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "bearer")
    pub token_type: String,
}

// ================================================================================================
// Handlers
// ================================================================================================

/// POST /api/v1/auth/register - 새 사용자 등록
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "등록된 사용자", body = UserResponse),
        (status = 409, description = "이미 등록된 사용자 이름", body = ApiErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    info!(username = %req.username, "사용자 등록 요청");

    let user = state
        .authenticator
        .register(&req.username, &req.password, Role::Free)
        .await?;

    Ok(Json(UserSummary::from(&user).into()))
}

/// POST /api/v1/auth/token - 로그인 및 액세스 토큰 발급
#[utoipa::path(
    post,
    path = "/api/v1/auth/token",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "발급된 토큰", body = TokenResponse),
        (status = 401, description = "잘못된 자격증명", body = ApiErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let access_token = state.authenticator.login(&req.username, &req.password).await?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// GET /api/v1/auth/me - 현재 인증된 사용자 조회
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "현재 사용자", body = UserResponse),
        (status = 401, description = "인증 실패", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn current_user(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(UserSummary::from(&user).into())
}

/// 인증 라우터 구성.
pub fn auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/token", post(login))
        .route("/me", get(current_user))
}
