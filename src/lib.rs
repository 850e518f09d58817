//! OpenID Connect 인가 코드 플로우 클라이언트
//!
//! 단일 프로바이더를 상대로 인가 코드 플로우를 한 단계씩 수행하는 CLI 클라이언트입니다.
//! 인가 URL을 만들고, 사용자가 붙여넣은 코드를 토큰으로 교환하고, 사용자 정보를 조회하고,
//! 토큰을 확인한 뒤 로그아웃 URL을 만듭니다.
//!
//! # Features
//!
//! - **인가 URL**: 요청마다 CSPRNG nonce를 포함한 `authorize` URL 생성
//! - **토큰 교환**: Basic 인증으로 보호된 `tokenservice` 호출
//! - **사용자 정보**: Bearer 토큰으로 보호된 `userinfo` 호출
//! - **토큰 확인**: `checkid` 호출 및 ID 토큰 `aud`/`nonce` 로컬 검사
//! - **로그아웃**: `endsession` URL 생성
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   CLI Driver    │ ← 코드 입력, 결과 출력, 종료 코드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  OidcService    │ ← 플로우 단계 (URL 생성, 토큰 교환, 조회)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ HttpTransport   │ ← 단발성 요청, 타임아웃, 상태 코드 검사
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Decoder      │ ← JSON 객체 → 응답 맵
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use oidc_access_client::config::OidcClientConfig;
//! use oidc_access_client::services::oidc::OidcService;
//!
//! let service = OidcService::new(OidcClientConfig::from_env()?)?;
//! println!("Paste this url in your browser: {}", service.build_authorization_url());
//!
//! let tokens = service.exchange_code_for_tokens(&code).await?;
//! let user_info = service.fetch_user_info(tokens.access_token()?).await?;
//! let check_id = service.check_id_token(tokens.id_token()?).await?;
//! println!("{}", service.build_logout_url(tokens.id_token()?));
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod services;
pub mod utils;
