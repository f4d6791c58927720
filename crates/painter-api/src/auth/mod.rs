//! 인증.
//!
//! JWT 기반 인증 및 Argon2 비밀번호 해싱을 제공합니다.
//!
//! # 구성 요소
//!
//! - [`Claims`]: JWT 페이로드 구조체
//! - [`Authenticator`]: 로그인 오케스트레이션 및 토큰 → 사용자 해석
//! - [`AuthUser`]: Axum 핸들러용 인증 사용자 추출기
//! - 비밀번호 해싱/검증 함수
//!
//! 토큰은 상태 없이(stateless) 검증됩니다. 서버 측 폐기 목록이
//! 없으므로 토큰은 내장된 만료 시각까지 유효합니다.

mod jwt;
mod middleware;
mod password;
mod service;

pub use jwt::{create_token, decode_token, Claims, JwtError};
pub use middleware::AuthUser;
pub use password::{hash_password, verify_password, PasswordError};
pub use service::{Authenticator, JwtConfig};
