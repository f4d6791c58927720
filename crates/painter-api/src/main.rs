//! Cube Painter API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다. 사용자 인증(JWT)과
//! 소유권 기반 프로젝트 저장 엔드포인트를 제공합니다.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use painter_api::auth::JwtConfig;
use painter_api::openapi::swagger_ui_router;
use painter_api::routes::create_api_router;
use painter_api::state::AppState;
use painter_core::{init_logging, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    // 설정 로드
    let config = AppConfig::load_default().context("설정 로드 실패")?;

    // tracing 초기화
    init_logging(&config.logging).map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

    info!("Starting Cube Painter API server...");

    // 데이터베이스 연결 풀 생성 (시작 시 1회, 종료 시 명시적으로 닫음)
    let database_url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL 환경 변수가 설정되지 않았습니다")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connection_timeout_secs))
        .idle_timeout(Duration::from_secs(config.database.idle_timeout_secs))
        .connect(&database_url)
        .await
        .context("데이터베이스 연결 실패")?;

    info!(
        max_connections = config.database.max_connections,
        "Database pool initialized"
    );

    // 마이그레이션 적용
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("마이그레이션 실패")?;

    // JWT 시크릿 로드
    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        warn!("JWT_SECRET not set, using default (INSECURE for development only)");
        "dev-secret-key-change-in-production".to_string()
    });
    let jwt = JwtConfig::new(jwt_secret, config.auth.token_ttl_minutes);

    // AppState 생성 (저장소 객체 명시적 구성)
    let state = Arc::new(AppState::new(pool.clone(), jwt));

    // 라우터 생성
    let app = create_router(state);

    // 서버 시작
    let addr = config.server.addr();
    info!(%addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("바인딩 실패: {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 종료 시그널 받은 후 정리 작업
    info!("Server shutdown initiated, cleaning up...");
    pool.close().await;
    info!("Database pool closed");

    Ok(())
}

/// 전체 라우터 조합.
fn create_router(state: Arc<AppState>) -> Router {
    create_api_router()
        .with_state(state)
        // OpenAPI 문서 및 Swagger UI
        .merge(swagger_ui_router())
        // 요청 추적
        .layer(TraceLayer::new_for_http())
        // 전역 타임아웃 (30초) - 전송 계층의 책임
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors_layer())
}

/// CORS 레이어 설정.
///
/// `CORS_ORIGINS` 환경 변수에 쉼표로 구분된 origin 목록을 지정할 수
/// 있습니다. 미설정 시 모든 origin을 허용합니다 (개발 모드).
fn cors_layer() -> CorsLayer {
    let allow_origin = match std::env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                warn!("CORS_ORIGINS is set but contains no valid origins, allowing any");
                AllowOrigin::any()
            } else {
                info!("CORS configured with {} allowed origins", origins.len());
                AllowOrigin::list(origins)
            }
        }
        _ => {
            warn!("CORS_ORIGINS not set, allowing any origin (development mode)");
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ])
}

/// 종료 시그널 대기 (Ctrl+C 또는 SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
