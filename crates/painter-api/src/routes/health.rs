//! 헬스 체크 endpoint.
//!
//! 로드밸런서나 오케스트레이션 시스템에서 사용됩니다.
//!
//! - `GET /health` - liveness (프로세스 살아있음)
//! - `GET /health/ready` - readiness (데이터베이스 연결 포함)

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::state::AppState;

/// 헬스 체크 응답.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// 전체 서비스 상태 ("healthy" | "unhealthy")
    pub status: String,
    /// API 버전
    pub version: String,
    /// 서버 업타임(초)
    pub uptime_secs: i64,
    /// 현재 시간 (ISO 8601)
    pub timestamp: String,
}

/// GET /health - liveness 체크
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "서버 동작 중", body = HealthResponse)),
    tag = "health"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let now = chrono::Utc::now();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: (now - state.started_at).num_seconds(),
        timestamp: now.to_rfc3339(),
    })
}

/// GET /health/ready - readiness 체크 (데이터베이스 연결 확인)
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "서비스 준비됨", body = HealthResponse),
        (status = 503, description = "데이터베이스 연결 불가", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn ready(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let now = chrono::Utc::now();
    let uptime_secs = (now - state.started_at).num_seconds();

    match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => Ok(Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_secs,
            timestamp: now.to_rfc3339(),
        })),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    uptime_secs,
                    timestamp: now.to_rfc3339(),
                }),
            ))
        }
    }
}

/// 헬스 체크 라우터 구성.
pub fn health_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health))
        .route("/ready", get(ready))
}
