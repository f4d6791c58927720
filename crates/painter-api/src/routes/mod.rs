//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness / readiness)
//! - `/api/v1/auth` - 등록, 로그인, 현재 사용자
//! - `/api/v1/projects` - 프로젝트 CRUD (소유자 전용)

pub mod auth;
pub mod health;
pub mod projects;

pub use auth::{auth_router, LoginRequest, RegisterRequest, TokenResponse, UserResponse};
pub use health::{health_router, HealthResponse};
pub use projects::{
    projects_router, CreateProjectRequest, DeleteResponse, ProjectRecord, UpdateProjectRequest,
};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// API 라우터 구성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .nest("/api/v1/auth", auth_router())
        .nest("/api/v1/projects", projects_router())
}
