//! 사용자 모델.
//!
//! 사용자 레코드는 등록 시 생성되며 이후 불변입니다.
//! 수정/삭제 연산은 존재하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 역할.
///
/// 저장만 되고 어떤 권한 로직에서도 읽지 않습니다.
/// 향후 티어링을 위해 예약된 필드입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 무료 사용자 (등록 시 기본값)
    Free,
    /// VIP 사용자
    Vip,
}

impl Default for Role {
    fn default() -> Self {
        Self::Free
    }
}

impl Role {
    /// 저장소에 기록되는 문자열 표현.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Vip => "vip",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "vip" => Ok(Self::Vip),
            other => Err(format!("알 수 없는 역할: {}", other)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 레코드.
///
/// `username`이 기본 키이며 시스템의 유일한 유일성 제약입니다.
/// 평문 비밀번호는 어디에도 저장/로깅되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// 사용자 이름 (고유, 기본 키)
    pub username: String,
    /// PHC 형식 비밀번호 해시 (스킴 식별자 + 파라미터 + 솔트 포함)
    pub password_hash: String,
    /// 사용자 역할
    pub role: Role,
    /// 등록 시각
    pub created_at: DateTime<Utc>,
}

/// 경계에 노출되는 사용자 요약.
///
/// 비밀번호 해시는 절대 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// 사용자 이름
    pub username: String,
    /// 사용자 역할
    pub role: Role,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::from_str("free").unwrap(), Role::Free);
        assert_eq!(Role::from_str("vip").unwrap(), Role::Vip);
        assert_eq!(Role::Free.as_str(), "free");
        assert_eq!(Role::Vip.to_string(), "vip");
        assert!(Role::from_str("admin").is_err());
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Free).unwrap(), "\"free\"");
        assert_eq!(serde_json::to_string(&Role::Vip).unwrap(), "\"vip\"");
    }

    #[test]
    fn test_summary_never_carries_hash() {
        let user = User {
            username: "alice".to_string(),
            password_hash: "$argon2id$...".to_string(),
            role: Role::Free,
            created_at: Utc::now(),
        };

        let summary = UserSummary::from(&user);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("alice"));
    }
}
