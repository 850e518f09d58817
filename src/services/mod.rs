//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 프로바이더와의 프로토콜 교환을 단계별 호출로 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::oidc::OidcService;
//!
//! let service = OidcService::new(config)?;
//! let logout_url = service.build_logout_url(id_token);
//! ```

pub mod oidc;
