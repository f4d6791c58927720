//! 프로젝트 API 라우트.
//!
//! 모든 엔드포인트는 인증이 필요하며, 읽기/수정/삭제/목록은
//! 소유자에게만 허용됩니다.
//!
//! # 엔드포인트
//!
//! - `POST /api/v1/projects` - 프로젝트 생성
//! - `GET /api/v1/projects/{id}` - 프로젝트 조회
//! - `PUT /api/v1/projects/{id}` - 프로젝트 부분 수정
//! - `DELETE /api/v1/projects/{id}` - 프로젝트 삭제
//! - `GET /api/v1/projects/by_user/{username}` - 사용자의 프로젝트 목록

use axum::{
    extract::{Path, State},
    routing::get,
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use painter_core::{FacesData, Project, ProjectDraft, ProjectPatch};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiErrorResponse};
use crate::state::AppState;

// ================================================================================================
// Request/Response Types
// ================================================================================================

/// 프로젝트 생성 요청.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    /// 프로젝트 이름
    pub name: String,
    /// 초기 면 데이터 (생략 시 face1..face6 빈 슬롯)
    #[serde(default)]
    #[schema(value_type = Object)]
    pub faces_data: Option<FacesData>,
}

/// 프로젝트 부분 수정 요청.
///
/// 존재하는 필드만 교체됩니다. `faces_data`는 전체 값 교체입니다.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    /// 새 이름 (생략 시 유지)
    #[serde(default)]
    pub name: Option<String>,
    /// 새 면 데이터 전체 (생략 시 유지)
    #[serde(default)]
    #[schema(value_type = Object)]
    pub faces_data: Option<FacesData>,
}

/// 경계에 노출되는 프로젝트 레코드.
///
/// `id`는 내부 표현과 무관하게 항상 문자열로 렌더링됩니다.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectRecord {
    /// 프로젝트 식별자 (불투명 문자열)
    pub id: String,
    /// 프로젝트 이름
    pub name: String,
    /// 소유자 사용자 이름
    pub owner: String,
    /// 면 슬롯별 페인팅 데이터
    #[schema(value_type = Object)]
    pub faces_data: FacesData,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
    /// 마지막 수정 시각
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectRecord {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_string(),
            name: project.name,
            owner: project.owner,
            faces_data: project.faces_data,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// 삭제 성공 응답.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

// ================================================================================================
// Handlers
// ================================================================================================

/// POST /api/v1/projects - 새 프로젝트 생성
#[utoipa::path(
    post,
    path = "/api/v1/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 200, description = "생성된 프로젝트", body = ProjectRecord),
        (status = 401, description = "인증 실패", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "projects"
)]
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<ProjectRecord>, ApiError> {
    let draft = ProjectDraft {
        name: req.name,
        faces_data: req.faces_data,
    };

    let project = state.projects.create_project(&user, draft).await?;

    Ok(Json(project.into()))
}

/// GET /api/v1/projects/{id} - 프로젝트 조회
#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}",
    params(("id" = String, Path, description = "프로젝트 식별자")),
    responses(
        (status = 200, description = "프로젝트", body = ProjectRecord),
        (status = 400, description = "잘못된 식별자", body = ApiErrorResponse),
        (status = 401, description = "인증 실패", body = ApiErrorResponse),
        (status = 403, description = "소유자가 아님", body = ApiErrorResponse),
        (status = 404, description = "존재하지 않음", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "projects"
)]
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ProjectRecord>, ApiError> {
    let project = state.projects.get_project(&user, &id).await?;

    Ok(Json(project.into()))
}

/// PUT /api/v1/projects/{id} - 프로젝트 부분 수정
#[utoipa::path(
    put,
    path = "/api/v1/projects/{id}",
    params(("id" = String, Path, description = "프로젝트 식별자")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "수정된 프로젝트", body = ProjectRecord),
        (status = 400, description = "잘못된 식별자", body = ApiErrorResponse),
        (status = 401, description = "인증 실패", body = ApiErrorResponse),
        (status = 403, description = "소유자가 아님", body = ApiErrorResponse),
        (status = 404, description = "존재하지 않음", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "projects"
)]
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectRecord>, ApiError> {
    let patch = ProjectPatch {
        name: req.name,
        faces_data: req.faces_data,
    };

    let project = state.projects.update_project(&user, &id, patch).await?;

    Ok(Json(project.into()))
}

/// DELETE /api/v1/projects/{id} - 프로젝트 삭제
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{id}",
    params(("id" = String, Path, description = "프로젝트 식별자")),
    responses(
        (status = 200, description = "삭제 완료", body = DeleteResponse),
        (status = 400, description = "잘못된 식별자", body = ApiErrorResponse),
        (status = 401, description = "인증 실패", body = ApiErrorResponse),
        (status = 403, description = "소유자가 아님", body = ApiErrorResponse),
        (status = 404, description = "존재하지 않음", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "projects"
)]
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.projects.delete_project(&user, &id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "프로젝트가 삭제되었습니다".to_string(),
    }))
}

/// GET /api/v1/projects/by_user/{username} - 사용자의 프로젝트 목록
///
/// 자기 자신의 사용자 이름에 대해서만 허용됩니다.
#[utoipa::path(
    get,
    path = "/api/v1/projects/by_user/{username}",
    params(("username" = String, Path, description = "대상 사용자 이름")),
    responses(
        (status = 200, description = "프로젝트 목록", body = [ProjectRecord]),
        (status = 401, description = "인증 실패", body = ApiErrorResponse),
        (status = 403, description = "본인이 아님", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "projects"
)]
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(username): Path<String>,
) -> Result<Json<Vec<ProjectRecord>>, ApiError> {
    let projects = state.projects.list_projects(&user, &username).await?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// 프로젝트 라우터 구성.
pub fn projects_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_project))
        .route(
            "/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/by_user/{username}", get(list_projects))
}
