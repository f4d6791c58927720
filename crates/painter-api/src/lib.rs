//! Cube Painter REST API 서버 라이브러리.
//!
//! 인증(JWT + Argon2), 소유권 기반 프로젝트 관리, PostgreSQL
//! 영속화를 제공합니다. 바이너리 진입점은 `main.rs`에 있습니다.

pub mod auth;
pub mod error;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;
