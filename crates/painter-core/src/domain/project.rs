//! 프로젝트 문서 모델.
//!
//! 프로젝트는 큐브 페인팅 에디터의 저장 상태입니다: 이름과
//! 6개의 면 슬롯(`face1`..`face6`)에 담긴 불투명한 페인팅 데이터.
//! 면 데이터의 내부 구조는 이 백엔드에서 해석하지 않습니다.
//!
//! 모든 프로젝트는 항상 정확히 한 명의 소유자를 가지며,
//! 어떤 연산도 소유권을 이전하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::{PainterError, PainterResult};

/// 큐브의 면 슬롯 키.
pub const FACE_SLOTS: [&str; 6] = ["face1", "face2", "face3", "face4", "face5", "face6"];

/// 면 슬롯 키 → 불투명한 페인팅 페이로드 매핑.
pub type FacesData = BTreeMap<String, Value>;

/// 기본 면 데이터: 6개 슬롯 모두 빈 객체.
pub fn default_faces() -> FacesData {
    FACE_SLOTS
        .iter()
        .map(|slot| (slot.to_string(), Value::Object(serde_json::Map::new())))
        .collect()
}

/// 불투명한 프로젝트 식별자.
///
/// 내부 표현은 호출자에게 보장되지 않습니다. 경계에서는 항상
/// 문자열로 렌더링되며, 문자열 왕복(round-trip)만 보장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// 저장소가 새 식별자를 생성합니다.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 외부 문자열에서 식별자를 검증하며 생성합니다.
    ///
    /// 구문이 잘못된 입력은 `InvalidId`로 실패합니다.
    /// 파싱은 존재 여부 조회와 별개입니다.
    pub fn parse(raw: &str) -> PainterResult<Self> {
        raw.parse::<Uuid>()
            .map(Self)
            .map_err(|_| PainterError::InvalidId(raw.to_string()))
    }

    /// 내부 UUID 표현.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProjectId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 프로젝트 문서.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// 저장소가 생성한 불투명 식별자
    pub id: ProjectId,
    /// 프로젝트 이름
    pub name: String,
    /// 소유자 사용자 이름 (문자열 동등성으로만 검사)
    pub owner: String,
    /// 면 슬롯별 페인팅 데이터
    pub faces_data: FacesData,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
    /// 마지막 수정 시각
    pub updated_at: DateTime<Utc>,
}

/// 프로젝트 생성 입력.
///
/// `faces_data`가 없으면 저장소가 6개의 빈 슬롯을 기본값으로 채웁니다.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDraft {
    /// 프로젝트 이름
    pub name: String,
    /// 초기 면 데이터 (생략 시 기본 6슬롯)
    #[serde(default)]
    pub faces_data: Option<FacesData>,
}

impl ProjectDraft {
    /// 초기 면 데이터를 결정합니다: 주어진 값 그대로, 없으면 기본 6슬롯.
    pub fn faces_or_default(&self) -> FacesData {
        self.faces_data.clone().unwrap_or_else(default_faces)
    }
}

/// 프로젝트 부분 수정 입력.
///
/// 존재하는 필드만 교체됩니다. 없는 필드는 저장된 값을 건드리지 않습니다.
/// `faces_data` 교체는 전체 값 교체이며 슬롯별 딥 머지가 아닙니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    /// 새 이름 (생략 시 유지)
    #[serde(default)]
    pub name: Option<String>,
    /// 새 면 데이터 전체 (생략 시 유지)
    #[serde(default)]
    pub faces_data: Option<FacesData>,
}

impl ProjectPatch {
    /// 아무 필드도 없는 패치인지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.faces_data.is_none()
    }

    /// 패치를 프로젝트에 적용합니다.
    ///
    /// 저장소 구현이 패치 의미론을 공유하기 위한 단일 지점입니다.
    pub fn apply(&self, project: &mut Project, now: DateTime<Utc>) {
        if let Some(ref name) = self.name {
            project.name = name.clone();
        }
        if let Some(ref faces) = self.faces_data {
            project.faces_data = faces.clone();
        }
        project.updated_at = now;
    }
}
