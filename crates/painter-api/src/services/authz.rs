//! 소유권 기반 접근 제어.
//!
//! 프로젝트는 소유자만 읽기/수정/삭제할 수 있고, 사용자별 목록
//! 조회는 자기 자신의 사용자 이름에 대해서만 허용됩니다.
//!
//! 소유권은 존재 확인이 끝난 뒤에만 평가됩니다. 존재하지 않는
//! 프로젝트는 소유권 검사에 도달하기 전에 Not-Found로 보고됩니다.

use painter_core::{PainterError, PainterResult, Project, User};

/// 프로젝트 접근 권한 검사.
///
/// `project.owner == user.username`일 때만 허용합니다.
pub fn authorize_project_access(user: &User, project: &Project) -> PainterResult<()> {
    if project.owner == user.username {
        Ok(())
    } else {
        Err(PainterError::Forbidden(format!(
            "프로젝트 {}에 대한 권한이 없습니다",
            project.id
        )))
    }
}

/// 자기 자신에 대한 조회 권한 검사.
///
/// `target_username == user.username`일 때만 허용합니다.
/// "내 프로젝트 목록" 조회에 사용됩니다.
pub fn authorize_self_access(user: &User, target_username: &str) -> PainterResult<()> {
    if target_username == user.username {
        Ok(())
    } else {
        Err(PainterError::Forbidden(
            "다른 사용자의 프로젝트에 접근할 수 없습니다".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use painter_core::{default_faces, ProjectId, Role};

    fn user(name: &str) -> User {
        User {
            username: name.to_string(),
            password_hash: "$argon2id$test".to_string(),
            role: Role::Free,
            created_at: Utc::now(),
        }
    }

    fn project_owned_by(owner: &str) -> Project {
        let now = Utc::now();
        Project {
            id: ProjectId::new(),
            name: "cube".to_string(),
            owner: owner.to_string(),
            faces_data: default_faces(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_owner_is_authorized() {
        let alice = user("alice");
        let project = project_owned_by("alice");
        assert!(authorize_project_access(&alice, &project).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let bob = user("bob");
        let project = project_owned_by("alice");
        let err = authorize_project_access(&bob, &project).unwrap_err();
        assert!(matches!(err, PainterError::Forbidden(_)));
    }

    #[test]
    fn test_self_access() {
        let alice = user("alice");
        assert!(authorize_self_access(&alice, "alice").is_ok());

        let err = authorize_self_access(&alice, "bob").unwrap_err();
        assert!(matches!(err, PainterError::Forbidden(_)));
    }
}
