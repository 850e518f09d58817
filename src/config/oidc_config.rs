//! # OpenID Connect Client Configuration
//!
//! 프로바이더에 등록된 클라이언트 정보와 HTTP 타임아웃을 관리하는 모듈입니다.
//! 모든 값은 환경 변수(또는 `.env` 파일)에서 읽으며, 누락된 필수 값은 패닉 대신
//! `AppError::ConfigError`로 보고됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! export OIDC_CLIENT_ID="your-client-id"
//! export OIDC_CLIENT_SECRET="your-client-secret"
//! export OIDC_REDIRECT_URI="https://yourdomain.com/callback"
//!
//! # 선택
//! export OIDC_PROVIDER_BASE_URL="https://www.paypal.com/webapps/auth/protocol/openidconnect/v1"
//! export OIDC_CONNECT_TIMEOUT_SECS="60"
//! export OIDC_READ_TIMEOUT_SECS="60"
//! ```

use std::env;
use std::fmt;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

/// 프로바이더 엔드포인트의 기본 경로
pub const DEFAULT_PROVIDER_BASE_URL: &str =
    "https://www.paypal.com/webapps/auth/protocol/openidconnect/v1";

/// 연결/읽기 타임아웃 기본값 (초)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// 환경 변수 이름
pub mod keys {
    pub const CLIENT_ID: &str = "OIDC_CLIENT_ID";
    pub const CLIENT_SECRET: &str = "OIDC_CLIENT_SECRET";
    pub const REDIRECT_URI: &str = "OIDC_REDIRECT_URI";
    pub const PROVIDER_BASE_URL: &str = "OIDC_PROVIDER_BASE_URL";
    pub const CONNECT_TIMEOUT_SECS: &str = "OIDC_CONNECT_TIMEOUT_SECS";
    pub const READ_TIMEOUT_SECS: &str = "OIDC_READ_TIMEOUT_SECS";
}

/// OpenID Connect 클라이언트 설정
///
/// 프로바이더 콘솔에 등록한 애플리케이션 정보입니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 `Debug` 출력에서 가려집니다
/// - `redirect_uri`는 프로바이더에 등록된 값과 바이트 단위로 같아야 합니다
#[derive(Clone)]
pub struct OidcClientConfig {
    /// 등록된 애플리케이션 식별자
    pub client_id: String,
    /// Basic 인증에 사용하는 공유 비밀
    pub client_secret: String,
    /// 프로바이더에 등록된 리디렉션 URI
    pub redirect_uri: String,
    /// 엔드포인트 기본 경로 (끝의 `/` 없음)
    pub provider_base_url: String,
    /// TCP 연결 타임아웃
    pub connect_timeout: Duration,
    /// 응답 읽기 타임아웃
    pub read_timeout: Duration,
}

impl fmt::Debug for OidcClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OidcClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .field("provider_base_url", &self.provider_base_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}

impl OidcClientConfig {
    /// 기본 타임아웃과 기본 프로바이더로 설정을 생성합니다.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            provider_base_url: DEFAULT_PROVIDER_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// 프로바이더 기본 경로를 교체합니다. 끝의 `/`는 제거됩니다.
    pub fn with_provider_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.provider_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// 연결/읽기 타임아웃을 교체합니다.
    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    /// 프로세스 환경 변수에서 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 필수 값 누락 또는 타임아웃 파싱 실패
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 로드합니다.
    ///
    /// `from_env`와 같은 규칙을 따르며, 테스트에서는 프로세스 환경을 건드리지 않고
    /// 맵 기반 조회 함수를 넘길 수 있습니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = required(&lookup, keys::CLIENT_ID)?;
        let client_secret = required(&lookup, keys::CLIENT_SECRET)?;
        let redirect_uri = required(&lookup, keys::REDIRECT_URI)?;

        let provider_base_url = lookup(keys::PROVIDER_BASE_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PROVIDER_BASE_URL.to_string());

        let connect_timeout = timeout_secs(&lookup, keys::CONNECT_TIMEOUT_SECS)?;
        let read_timeout = timeout_secs(&lookup, keys::READ_TIMEOUT_SECS)?;

        Ok(Self::new(client_id, client_secret, redirect_uri)
            .with_provider_base_url(provider_base_url)
            .with_timeouts(connect_timeout, read_timeout))
    }

    /// 엔드포인트 이름(`authorize`, `tokenservice` 등)에 대한 전체 URL을 반환합니다.
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.provider_base_url, name)
    }
}

fn required<F>(lookup: &F, key: &str) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
}

fn timeout_secs<F>(lookup: &F, key: &str) -> AppResult<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| {
                AppError::ConfigError(format!("{} must be a positive integer, got '{}'", key, raw))
            }),
    }
}
