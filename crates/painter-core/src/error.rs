//! 시스템 전반의 에러 타입.
//!
//! 모든 에러는 종결적(terminal)입니다. 내부에서 재시도하거나
//! 일반 에러로 뭉개지 않고 호출자에게 그대로 전달됩니다.
//!
//! 검사 순서는 항상 다음을 따릅니다:
//! 인증 → 식별자 구문 검증 → 존재 확인 → 소유권 확인.
//! 따라서 호출자는 적용 가능한 가장 구체적인 에러를 받습니다.

use thiserror::Error;

/// 핵심 도메인 에러.
#[derive(Debug, Error)]
pub enum PainterError {
    /// 이미 등록된 사용자 이름
    #[error("이미 등록된 사용자 이름입니다: {0}")]
    DuplicateUsername(String),

    /// 잘못된 자격증명.
    ///
    /// 존재하지 않는 사용자와 잘못된 비밀번호를 구분하지 않습니다.
    /// 계정 존재 여부가 노출되지 않도록 하는 보안 속성입니다.
    #[error("사용자 이름 또는 비밀번호가 올바르지 않습니다")]
    InvalidCredentials,

    /// 인증 실패 (토큰 누락/만료/변조, 또는 토큰 주체가 더 이상 존재하지 않음)
    #[error("인증 실패: {0}")]
    Unauthenticated(String),

    /// 구문이 잘못된 프로젝트 식별자
    #[error("유효하지 않은 프로젝트 ID: {0}")]
    InvalidId(String),

    /// 형식은 올바르지만 일치하는 레코드가 없는 식별자
    #[error("찾을 수 없음: {0}")]
    NotFound(String),

    /// 레코드는 존재하지만 호출자가 소유자가 아님
    #[error("접근 권한이 없습니다: {0}")]
    Forbidden(String),

    /// 데이터베이스 에러
    #[error("데이터베이스 에러: {0}")]
    Database(String),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 핵심 작업을 위한 Result 타입.
pub type PainterResult<T> = Result<T, PainterError>;

impl PainterError {
    /// 기계가 판독 가능한 에러 코드를 반환합니다.
    ///
    /// HTTP 경계에서 응답 본문의 `code` 필드로 사용됩니다.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateUsername(_) => "DUPLICATE_USERNAME",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::InvalidId(_) => "INVALID_ID",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Database(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
