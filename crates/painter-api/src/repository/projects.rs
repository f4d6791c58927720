//! 프로젝트 Repository.
//!
//! `projects` 테이블에 대한 데이터베이스 연산을 담당합니다.
//! 면 데이터는 JSONB로 저장되며 내용은 해석하지 않습니다.
//! update/delete는 단일 문장이므로 문서 단위로 원자적입니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use painter_core::{
    FacesData, PainterError, PainterResult, Project, ProjectDraft, ProjectId, ProjectPatch,
    ProjectStore,
};

/// `projects` 테이블 row.
#[derive(Debug, Clone, FromRow)]
struct ProjectRow {
    id: Uuid,
    name: String,
    owner: String,
    faces_data: Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjectRow {
    fn into_domain(self) -> PainterResult<Project> {
        let faces_data: FacesData = serde_json::from_value(self.faces_data)
            .map_err(|e| PainterError::Internal(format!("faces_data 역직렬화 실패: {}", e)))?;

        Ok(Project {
            id: ProjectId::from(self.id),
            name: self.name,
            owner: self.owner,
            faces_data,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn faces_to_value(faces: &FacesData) -> PainterResult<Value> {
    serde_json::to_value(faces)
        .map_err(|e| PainterError::Internal(format!("faces_data 직렬화 실패: {}", e)))
}

/// PostgreSQL 프로젝트 저장소.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    /// 연결 풀로 저장소를 생성합니다.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn create(&self, owner: &str, draft: ProjectDraft) -> PainterResult<Project> {
        let faces = faces_to_value(&draft.faces_or_default())?;

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects (name, owner, faces_data)
            VALUES ($1, $2, $3)
            RETURNING id, name, owner, faces_data, created_at, updated_at
            "#,
        )
        .bind(&draft.name)
        .bind(owner)
        .bind(faces)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PainterError::Database(e.to_string()))?;

        row.into_domain()
    }

    async fn get(&self, id: ProjectId) -> PainterResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, owner, faces_data, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PainterError::Database(e.to_string()))?;

        row.map(ProjectRow::into_domain).transpose()
    }

    async fn update(&self, id: ProjectId, patch: ProjectPatch) -> PainterResult<Option<Project>> {
        // 빈 패치는 저장된 값을 건드리지 않음
        if patch.is_empty() {
            return self.get(id).await;
        }

        let faces = patch.faces_data.as_ref().map(faces_to_value).transpose()?;

        // 단일 UPDATE 문: 부분 패치가 문서 단위로 원자적으로 적용됨.
        // faces_data는 전체 값 교체 (슬롯별 머지 아님).
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            UPDATE projects
            SET name = COALESCE($2, name),
                faces_data = COALESCE($3, faces_data),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, owner, faces_data, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(patch.name.as_deref())
        .bind(faces)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PainterError::Database(e.to_string()))?;

        row.map(ProjectRow::into_domain).transpose()
    }

    async fn delete(&self, id: ProjectId) -> PainterResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| PainterError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_owner(&self, owner: &str) -> PainterResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, owner, faces_data, created_at, updated_at
            FROM projects
            WHERE owner = $1
            ORDER BY created_at
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PainterError::Database(e.to_string()))?;

        rows.into_iter().map(ProjectRow::into_domain).collect()
    }
}
