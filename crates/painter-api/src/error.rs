//! 통합 API 에러 응답 타입.
//!
//! 모든 엔드포인트에서 일관된 에러 형식을 제공합니다. 핵심 에러
//! 분류(`PainterError`)가 HTTP 상태 코드와 기계 판독 가능한
//! 코드로 매핑되는 단일 지점입니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use painter_core::PainterError;

/// 통합 API 에러 응답.
///
/// # 예시
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "찾을 수 없음: 프로젝트 0197...",
///   "timestamp": 1738300800
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "DUPLICATE_USERNAME", "FORBIDDEN", "NOT_FOUND")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 추가 에러 상세 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// 에러 발생 타임스탬프 (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ApiErrorResponse {
    /// 기본 에러 생성 (타임스탬프 포함).
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            timestamp: Some(chrono::Utc::now().timestamp()),
        }
    }
}

/// 핸들러용 에러 래퍼.
///
/// `?`로 전파된 `PainterError`를 HTTP 응답으로 변환합니다.
#[derive(Debug)]
pub struct ApiError(pub PainterError);

impl From<PainterError> for ApiError {
    fn from(err: PainterError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// 에러 종류별 HTTP 상태 코드.
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            PainterError::DuplicateUsername(_) => StatusCode::CONFLICT,
            PainterError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            PainterError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            PainterError::InvalidId(_) => StatusCode::BAD_REQUEST,
            PainterError::NotFound(_) => StatusCode::NOT_FOUND,
            PainterError::Forbidden(_) => StatusCode::FORBIDDEN,
            PainterError::Database(_) | PainterError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 내부 에러 상세는 로그로만 남기고 응답에는 노출하지 않음
        let message = match &self.0 {
            PainterError::Database(detail) | PainterError::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                "내부 서버 에러".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ApiErrorResponse::new(self.0.code(), message));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (
                PainterError::DuplicateUsername("a".into()),
                StatusCode::CONFLICT,
            ),
            (PainterError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                PainterError::Unauthenticated("x".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (PainterError::InvalidId("x".into()), StatusCode::BAD_REQUEST),
            (PainterError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (PainterError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (
                PainterError::Database("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError(err).status_code(), expected);
        }
    }

    #[tokio::test]
    async fn test_internal_detail_is_not_exposed() {
        let response =
            ApiError(PainterError::Database("password=hunter2 leaked".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // 본문에는 에러 코드만 노출되고 내부 상세는 포함되지 않음
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.contains("hunter2"));
        assert!(!body.contains("leaked"));
        assert!(body.contains("DB_ERROR"));
    }
}
