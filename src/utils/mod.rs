//! 공통 유틸리티 함수 모듈
//!
//! 자격 증명 인코딩, nonce 생성, 터미널 출력 등의 기능을 제공합니다.
//!
//! # Modules
//!
//! - [`credentials`] - Basic 인증 값 인코딩, nonce 생성
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::credentials::{basic_auth_credentials, generate_nonce};
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let header = format!("Basic {}", basic_auth_credentials("id", "secret"));
//! let nonce = generate_nonce();
//!
//! print_boxed_title("OpenID Connect Client");
//! ```

pub mod credentials;
pub mod display_terminal;
