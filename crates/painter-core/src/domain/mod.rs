//! 핵심 도메인 모델.
//!
//! 사용자, 프로젝트 문서, 저장소 계약을 정의합니다.

pub mod project;
pub mod store;
pub mod user;

pub use project::{
    default_faces, FacesData, Project, ProjectDraft, ProjectId, ProjectPatch, FACE_SLOTS,
};
pub use store::{CredentialStore, ProjectStore};
pub use user::{Role, User, UserSummary};
