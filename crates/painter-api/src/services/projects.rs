//! 프로젝트 서비스.
//!
//! 프로젝트 저장소 위의 소유권 게이트입니다. 모든 연산은 고정된
//! 검사 순서를 따릅니다: 식별자 구문 검증 → 존재 확인 → 소유권
//! 확인. (인증은 추출기가 이 계층에 도달하기 전에 수행합니다.)

use std::sync::Arc;

use tracing::{debug, info};

use painter_core::{
    PainterError, PainterResult, Project, ProjectDraft, ProjectId, ProjectPatch, ProjectStore,
    User,
};

use super::authz::{authorize_project_access, authorize_self_access};

/// 소유권 검사를 적용하는 프로젝트 서비스.
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
}

impl ProjectService {
    /// 새 프로젝트 서비스 생성.
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// 새 프로젝트 생성. 호출자가 소유자가 됩니다.
    pub async fn create_project(&self, user: &User, draft: ProjectDraft) -> PainterResult<Project> {
        info!(owner = %user.username, name = %draft.name, "프로젝트 생성");
        self.store.create(&user.username, draft).await
    }

    /// 프로젝트 조회.
    pub async fn get_project(&self, user: &User, raw_id: &str) -> PainterResult<Project> {
        let id = ProjectId::parse(raw_id)?;

        let project = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| PainterError::NotFound(format!("프로젝트 {}", id)))?;

        authorize_project_access(user, &project)?;

        Ok(project)
    }

    /// 프로젝트 부분 수정.
    ///
    /// 소유권이 확인된 뒤 저장소의 원자적 단일 문서 갱신에
    /// 위임합니다. 존재 확인과 갱신 사이에 삭제가 끼어들면
    /// `NotFound`로 보고됩니다.
    pub async fn update_project(
        &self,
        user: &User,
        raw_id: &str,
        patch: ProjectPatch,
    ) -> PainterResult<Project> {
        let id = ProjectId::parse(raw_id)?;

        let existing = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| PainterError::NotFound(format!("프로젝트 {}", id)))?;

        authorize_project_access(user, &existing)?;

        debug!(id = %id, "프로젝트 수정");
        self.store
            .update(id, patch)
            .await?
            .ok_or_else(|| PainterError::NotFound(format!("프로젝트 {}", id)))
    }

    /// 프로젝트 삭제.
    pub async fn delete_project(&self, user: &User, raw_id: &str) -> PainterResult<()> {
        let id = ProjectId::parse(raw_id)?;

        let existing = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| PainterError::NotFound(format!("프로젝트 {}", id)))?;

        authorize_project_access(user, &existing)?;

        info!(id = %id, owner = %user.username, "프로젝트 삭제");
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(PainterError::NotFound(format!("프로젝트 {}", id)))
        }
    }

    /// 사용자의 프로젝트 목록 조회.
    ///
    /// 자기 자신의 사용자 이름에 대해서만 허용됩니다.
    pub async fn list_projects(&self, user: &User, username: &str) -> PainterResult<Vec<Project>> {
        authorize_self_access(user, username)?;

        self.store.list_by_owner(username).await
    }
}
