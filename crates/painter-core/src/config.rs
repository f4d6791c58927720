//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! 로드 순서: 기본값 → 설정 파일(TOML, 선택) → `PAINTER__` 환경 변수.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 데이터베이스 설정
    #[serde(default)]
    pub database: DatabaseConfig,
    /// 인증 설정
    #[serde(default)]
    pub auth: AuthConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    #[serde(default = "default_host")]
    pub host: String,
    /// 리스닝할 포트
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 소켓 주소 문자열 반환.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 데이터베이스 연결 풀 설정.
///
/// 접속 URL은 설정 파일이 아닌 `DATABASE_URL` 환경 변수로 전달됩니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// 최대 연결 수
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// 연결 타임아웃 (초)
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_secs: u64,
    /// 유휴 타임아웃 (초)
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    300
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            connection_timeout_secs: default_connection_timeout(),
            idle_timeout_secs: default_idle_timeout(),
        }
    }
}

/// 인증 설정.
///
/// JWT 서명 비밀 키는 설정 파일에 두지 않고 `JWT_SECRET` 환경
/// 변수에서 읽습니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// 발급되는 액세스 토큰의 TTL (분)
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: i64,
}

fn default_token_ttl() -> i64 {
    30
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_minutes: default_token_ttl(),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // 파일이 있으면 로드 (없어도 기본값으로 동작)
        if path.as_ref().exists() {
            builder = builder.add_source(config::File::from(path.as_ref()));
        }

        // 환경 변수로 오버라이드 (예: PAINTER__SERVER__PORT=8080)
        builder = builder.add_source(
            config::Environment::with_prefix("PAINTER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.addr(), "127.0.0.1:8000");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.auth.token_ttl_minutes, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.auth.token_ttl_minutes, 30);
    }
}
