//! # Painter Core
//!
//! Cube Painter 백엔드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 사용자 및 역할 모델
//! - 프로젝트 문서 (6면 페인팅 데이터)
//! - 저장소 계약 (CredentialStore, ProjectStore)
//! - 에러 분류 체계
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
