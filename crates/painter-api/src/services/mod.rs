//! 핵심 서비스 계층.
//!
//! 라우트 핸들러와 저장소 사이에서 소유권 검사와 검사 순서를
//! 담당합니다. 핸들러는 이 계층을 호출하는 얇은 글루입니다.

pub mod authz;
pub mod projects;

pub use authz::{authorize_project_access, authorize_self_access};
pub use projects::ProjectService;
