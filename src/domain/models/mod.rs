//! 도메인 모델 모듈
//!
//! - [`oidc`] - OpenID Connect 인가 코드 플로우 모델

pub mod oidc;

pub use oidc::*;
