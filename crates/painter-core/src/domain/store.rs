//! 저장소 계약.
//!
//! 자격증명과 프로젝트 문서의 영속화를 위한 저장소 중립적인
//! 인터페이스를 제공합니다. 프로덕션에서는 PostgreSQL 구현이,
//! 테스트에서는 인메모리 구현이 이 trait들을 구현합니다.
//!
//! 저장소 객체는 프로세스 시작 시 명시적으로 생성되어 의존성
//! 주입으로 전달됩니다. 전역 가변 연결 상태는 존재하지 않습니다.

use async_trait::async_trait;

use super::{Project, ProjectDraft, ProjectId, ProjectPatch, Role, User};
use crate::error::PainterResult;

/// 사용자 자격증명 저장소.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 새 사용자를 등록합니다.
    ///
    /// 유일성 검사와 원자적이어야 합니다: 같은 사용자 이름의 동시
    /// 등록이 둘 다 성공해서는 안 됩니다. 구현은 조회-후-삽입이 아닌
    /// 충돌 시 실패하는 조건부 삽입이어야 합니다.
    ///
    /// # Errors
    ///
    /// 이미 등록된 사용자 이름이면 `DuplicateUsername`.
    async fn register(
        &self,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> PainterResult<User>;

    /// 사용자 이름으로 사용자를 조회합니다.
    async fn find_by_username(&self, username: &str) -> PainterResult<Option<User>>;
}

/// 프로젝트 문서 저장소.
///
/// 단일 문서에 대한 update/delete는 원자적이어야 합니다:
/// 동시 update와 delete가 부분 적용된 결과를 만들면 안 됩니다.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// 새 프로젝트를 생성합니다. 식별자는 저장소가 생성합니다.
    ///
    /// draft에 면 데이터가 없으면 6개의 빈 슬롯이 기본값입니다.
    async fn create(&self, owner: &str, draft: ProjectDraft) -> PainterResult<Project>;

    /// 식별자로 프로젝트를 조회합니다.
    async fn get(&self, id: ProjectId) -> PainterResult<Option<Project>>;

    /// 프로젝트를 부분 수정합니다.
    ///
    /// 패치에 존재하는 필드만 교체되며 `faces_data`는 전체 값으로
    /// 교체됩니다. 레코드가 없으면 `None`을 반환합니다.
    async fn update(&self, id: ProjectId, patch: ProjectPatch) -> PainterResult<Option<Project>>;

    /// 프로젝트를 삭제합니다. 삭제된 레코드가 있으면 `true`.
    async fn delete(&self, id: ProjectId) -> PainterResult<bool>;

    /// 소유자의 모든 프로젝트를 조회합니다 (삽입 순서).
    async fn list_by_owner(&self, owner: &str) -> PainterResult<Vec<Project>>;
}
