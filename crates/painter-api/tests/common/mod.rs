//! 테스트용 인메모리 저장소 구현.
//!
//! painter-core의 저장소 계약을 메모리에서 구현하여 데이터베이스
//! 없이 인증/소유권 로직을 end-to-end로 검증합니다.

// 각 테스트 바이너리가 일부 헬퍼만 사용함
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use painter_core::{
    CredentialStore, PainterError, PainterResult, Project, ProjectDraft, ProjectId, ProjectPatch,
    ProjectStore, Role, User,
};

use painter_api::auth::{Authenticator, JwtConfig};
use painter_api::services::ProjectService;

pub const TEST_SECRET: &str = "integration-test-secret-key-minimum-32-chars";

/// 인메모리 자격증명 저장소.
#[derive(Default)]
pub struct MemoryCredentialStore {
    users: Mutex<BTreeMap<String, User>>,
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn register(
        &self,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> PainterResult<User> {
        let mut users = self.users.lock().unwrap();

        // 잠금 하에서의 조건부 삽입: 유일성 검사와 원자적
        if users.contains_key(username) {
            return Err(PainterError::DuplicateUsername(username.to_string()));
        }

        let user = User {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            role,
            created_at: Utc::now(),
        };
        users.insert(username.to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> PainterResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(username).cloned())
    }
}

/// 인메모리 프로젝트 저장소 (삽입 순서 유지).
#[derive(Default)]
pub struct MemoryProjectStore {
    projects: Mutex<Vec<Project>>,
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn create(&self, owner: &str, draft: ProjectDraft) -> PainterResult<Project> {
        let now = Utc::now();
        let project = Project {
            id: ProjectId::new(),
            name: draft.name.clone(),
            owner: owner.to_string(),
            faces_data: draft.faces_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.projects.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn get(&self, id: ProjectId) -> PainterResult<Option<Project>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn update(&self, id: ProjectId, patch: ProjectPatch) -> PainterResult<Option<Project>> {
        let mut projects = self.projects.lock().unwrap();
        match projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                if !patch.is_empty() {
                    patch.apply(project, Utc::now());
                }
                Ok(Some(project.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: ProjectId) -> PainterResult<bool> {
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() < before)
    }

    async fn list_by_owner(&self, owner: &str) -> PainterResult<Vec<Project>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.owner == owner)
            .cloned()
            .collect())
    }
}

/// 인메모리 저장소로 구성된 인증 서비스.
pub fn test_authenticator() -> (Authenticator, Arc<MemoryCredentialStore>) {
    let store = Arc::new(MemoryCredentialStore::default());
    let auth = Authenticator::new(store.clone(), JwtConfig::new(TEST_SECRET, 30));
    (auth, store)
}

/// 인메모리 저장소로 구성된 프로젝트 서비스.
pub fn test_project_service() -> ProjectService {
    ProjectService::new(Arc::new(MemoryProjectStore::default()))
}
