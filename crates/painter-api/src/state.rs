//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! 저장소 객체는 프로세스 시작 시 한 번 명시적으로 생성되어
//! `Arc`로 래핑된 상태를 통해 핸들러에 주입됩니다. 전역 가변
//! 연결 상태는 존재하지 않습니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use painter_core::{CredentialStore, ProjectStore};

use crate::auth::{Authenticator, JwtConfig};
use crate::repository::{PgCredentialStore, PgProjectStore};
use crate::services::ProjectService;

/// 애플리케이션 공유 상태.
///
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
#[derive(Clone)]
pub struct AppState {
    /// 데이터베이스 연결 풀 (PostgreSQL)
    pub db_pool: PgPool,

    /// 인증 서비스 - 등록, 로그인, 토큰 → 사용자 해석
    pub authenticator: Authenticator,

    /// 소유권 검사가 적용된 프로젝트 서비스
    pub projects: ProjectService,

    /// 서버 시작 시각 (헬스 체크 업타임용)
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// PostgreSQL 저장소로 상태를 구성합니다.
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        let credentials: Arc<dyn CredentialStore> = Arc::new(PgCredentialStore::new(pool.clone()));
        let project_store: Arc<dyn ProjectStore> = Arc::new(PgProjectStore::new(pool.clone()));

        Self {
            db_pool: pool,
            authenticator: Authenticator::new(credentials, jwt),
            projects: ProjectService::new(project_store),
            started_at: Utc::now(),
        }
    }
}
