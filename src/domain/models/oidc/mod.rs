//! # OpenID Connect Domain Models
//!
//! 인가 코드 플로우에서 주고받는 값들을 정의합니다.
//!
//! ```text
//! oidc/
//! ├── authorization_request.rs  ← authorize URL 파라미터
//! ├── nonce.rs                  ← 요청별 1회용 값
//! ├── oidc_response.rs          ← 토큰/사용자 정보/checkid 응답 맵
//! └── id_token_claims.rs        ← ID 토큰 페이로드
//! ```
//!
//! 모든 값은 한 번의 실행 동안에만 존재하며 저장되거나 공유되지 않습니다.

pub mod authorization_request;
pub mod id_token_claims;
pub mod nonce;
pub mod oidc_response;

pub use authorization_request::*;
pub use id_token_claims::*;
pub use nonce::*;
pub use oidc_response::*;
