//! 사용자 자격증명 Repository.
//!
//! `users` 테이블에 대한 데이터베이스 연산을 담당합니다.
//! `username`이 기본 키이며, 등록은 충돌 시 실패하는 조건부
//! 삽입으로 유일성 검사와 원자적입니다.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use painter_core::{CredentialStore, PainterError, PainterResult, Role, User};

/// `users` 테이블 row.
#[derive(Debug, Clone, FromRow)]
struct UserRow {
    username: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_domain(self) -> PainterResult<User> {
        let role = Role::from_str(&self.role).map_err(PainterError::Internal)?;
        Ok(User {
            username: self.username,
            password_hash: self.password_hash,
            role,
            created_at: self.created_at,
        })
    }
}

/// PostgreSQL 자격증명 저장소.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    /// 연결 풀로 저장소를 생성합니다.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn register(
        &self,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> PainterResult<User> {
        // 조건부 삽입: 충돌 시 row가 반환되지 않음.
        // 조회-후-삽입과 달리 동시 등록이 둘 다 성공할 수 없습니다.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, $3)
            ON CONFLICT (username) DO NOTHING
            RETURNING username, password_hash, role, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PainterError::Database(e.to_string()))?;

        match row {
            Some(row) => row.into_domain(),
            None => Err(PainterError::DuplicateUsername(username.to_string())),
        }
    }

    async fn find_by_username(&self, username: &str) -> PainterResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT username, password_hash, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PainterError::Database(e.to_string()))?;

        row.map(UserRow::into_domain).transpose()
    }
}
