//! # Configuration Module
//!
//! 클라이언트 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 한 곳에서 로드하고 검증합니다.
//!
//! ## 모듈 구성
//!
//! - [`oidc_config`] - 클라이언트 자격 증명, 리디렉션 URI, 프로바이더 경로, 타임아웃
//! - [`env_file`] - `PROFILE`별 `.env` 파일 로드
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수 또는 `.env` 파일로만 제공
//! - 필수 설정값 누락은 패닉이 아니라 `ConfigError`로 보고
//! - 프로바이더 경로와 타임아웃은 안전한 기본값 제공
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::OidcClientConfig;
//!
//! let config = OidcClientConfig::from_env()?;
//! println!("Authorize endpoint: {}", config.endpoint("authorize"));
//! ```
//!
//! ## .env 파일 예시
//!
//! ```bash
//! OIDC_CLIENT_ID="your-client-id"
//! OIDC_CLIENT_SECRET="your-client-secret"
//! OIDC_REDIRECT_URI="https://yourdomain.com/callback"
//! ```

pub mod env_file;
pub mod oidc_config;

pub use env_file::*;
pub use oidc_config::*;
