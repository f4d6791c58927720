//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiErrorResponse;
use crate::routes::{
    CreateProjectRequest, DeleteResponse, HealthResponse, LoginRequest, ProjectRecord,
    RegisterRequest, TokenResponse, UpdateProjectRequest, UserResponse,
};

/// Cube Painter API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cube Painter 3D API",
        version = "0.1.0",
        description = "3D 큐브 페인팅 에디터를 위한 REST API. \
            사용자 등록/로그인(JWT)과 소유권 기반 프로젝트 저장을 제공합니다."
    ),
    paths(
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::current_user,
        crate::routes::projects::create_project,
        crate::routes::projects::get_project,
        crate::routes::projects::update_project,
        crate::routes::projects::delete_project,
        crate::routes::projects::list_projects,
        crate::routes::health::health,
        crate::routes::health::ready,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        UserResponse,
        TokenResponse,
        CreateProjectRequest,
        UpdateProjectRequest,
        ProjectRecord,
        DeleteResponse,
        HealthResponse,
        ApiErrorResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "인증 및 사용자 관리"),
        (name = "projects", description = "프로젝트 CRUD (소유자 전용)"),
        (name = "health", description = "헬스 체크")
    )
)]
pub struct ApiDoc;

/// Bearer 토큰 보안 스킴 등록.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Swagger UI 라우터 구성.
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
