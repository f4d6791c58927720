//! PostgreSQL 저장소 구현.
//!
//! painter-core의 저장소 계약(`CredentialStore`, `ProjectStore`)의
//! sqlx 기반 구현입니다. 연결 풀은 시작 시 생성되어 명시적으로
//! 주입됩니다.

pub mod projects;
pub mod users;

pub use projects::PgProjectStore;
pub use users::PgCredentialStore;
