//! OpenID Connect 서비스 모듈
//!
//! 인가 코드 플로우의 다섯 단계와 ID 토큰 로컬 검사를 제공합니다.
//!
//! # Security
//!
//! - 토큰 교환은 Basic 인증(client_id:client_secret)으로 보호
//! - 사용자 정보 조회는 Bearer 액세스 토큰으로 보호
//! - 인가 요청마다 CSPRNG 기반 nonce 생성, ID 토큰의 nonce echo 확인
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::oidc::OidcService;
//!
//! let service = OidcService::new(OidcClientConfig::from_env()?)?;
//! println!("{}", service.build_authorization_url());
//!
//! let tokens = service.exchange_code_for_tokens(&code).await?;
//! let user_info = service.fetch_user_info(tokens.access_token()?).await?;
//! ```

pub mod id_token_service;
pub mod oidc_service;

pub use oidc_service::OidcService;
