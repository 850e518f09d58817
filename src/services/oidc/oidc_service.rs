//! # OpenID Connect 인가 코드 플로우 서비스
//!
//! 한 명의 사용자가 한 번 실행하는 인가 코드 플로우의 각 단계를 제공합니다.
//! 각 단계는 입력만으로 결정되는 독립 호출이며, 서비스 내부에는 상태 머신이 없습니다.
//! 단계 사이의 값 전달(코드 → 토큰 → 클레임)은 드라이버가 담당합니다.
//!
//! ## Authorization Code Flow
//!
//! ```text
//! ┌──────────┐                    ┌──────────────┐                    ┌──────────────────┐
//! │  사용자    │                    │  이 클라이언트   │                    │  Identity Provider │
//! └──────────┘                    └──────────────┘                    └──────────────────┘
//!      │                                 │                                      │
//!      │ 1. authorize URL 출력            │                                      │
//!      │◄────────────────────────────────┤                                      │
//!      │ 2. 브라우저에서 로그인/동의                                                  │
//!      ├───────────────────────────────────────────────────────────────────────►│
//!      │ 3. redirect_uri?code=...                                               │
//!      │◄───────────────────────────────────────────────────────────────────────┤
//!      │ 4. 코드 붙여넣기                    │                                      │
//!      ├────────────────────────────────►│ 5. POST tokenservice (Basic)          │
//!      │                                 ├─────────────────────────────────────►│
//!      │                                 │ 6. GET userinfo (Bearer)              │
//!      │                                 ├─────────────────────────────────────►│
//!      │                                 │ 7. GET checkid                        │
//!      │                                 ├─────────────────────────────────────►│
//!      │ 8. endsession URL 출력            │                                      │
//!      │◄────────────────────────────────┤                                      │
//! ```

use log::info;
use reqwest::Method;

use crate::config::OidcClientConfig;
use crate::domain::models::{
    AuthorizationRequest, CheckIdResponse, IdTokenClaims, Nonce, OidcResponse, TokenResponse,
    UserInfoResponse,
};
use crate::errors::AppResult;
use crate::http::HttpTransport;
use crate::services::oidc::id_token_service;
use crate::utils::credentials::basic_auth_credentials;

/// 프로바이더 엔드포인트 이름
pub mod endpoints {
    pub const AUTHORIZE: &str = "authorize";
    pub const TOKEN_SERVICE: &str = "tokenservice";
    pub const USER_INFO: &str = "userinfo";
    pub const CHECK_ID: &str = "checkid";
    pub const END_SESSION: &str = "endsession";
}

/// 인가 코드 플로우 오케스트레이터
///
/// 설정과 HTTP 전송 계층을 소유하며, 네트워크 단계는 모두 [`HttpTransport::call`]을 거칩니다.
#[derive(Debug, Clone)]
pub struct OidcService {
    config: OidcClientConfig,
    transport: HttpTransport,
}

impl OidcService {
    /// 설정의 타임아웃으로 전송 계층을 만들어 서비스를 생성합니다.
    pub fn new(config: OidcClientConfig) -> AppResult<Self> {
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: OidcClientConfig, transport: HttpTransport) -> Self {
        Self { config, transport }
    }

    /// 새 nonce로 인가 요청을 조립합니다.
    ///
    /// 드라이버는 반환된 요청의 nonce를 보관했다가 ID 토큰 검사에 사용합니다.
    pub fn new_authorization_request(&self) -> AuthorizationRequest {
        AuthorizationRequest::new(&self.config.client_id, &self.config.redirect_uri)
    }

    /// 사용자가 브라우저에 붙여넣을 인가 URL을 만듭니다.
    ///
    /// 호출할 때마다 새 nonce가 생성됩니다.
    pub fn build_authorization_url(&self) -> String {
        self.authorization_url(&self.new_authorization_request())
    }

    /// 주어진 인가 요청을 이 프로바이더의 `authorize` URL로 변환합니다.
    pub fn authorization_url(&self, request: &AuthorizationRequest) -> String {
        request.to_url(&self.config.endpoint(endpoints::AUTHORIZE))
    }

    /// 인가 코드를 토큰으로 교환합니다.
    ///
    /// `POST tokenservice?grant_type=authorization_code&code=<code>` 요청을
    /// `Authorization: Basic <client_id:client_secret>` 헤더와 함께 보냅니다.
    /// 코드는 로컬에서 검증하지 않습니다. 빈 코드나 이미 사용한 코드는 프로바이더가
    /// 200 이외의 상태로 거절하며 `HttpStatusError`가 됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::HttpStatusError` - 프로바이더가 코드를 거절
    /// * `AppError::TransportError` - 네트워크 실패
    /// * `AppError::DecodeError` - JSON 객체가 아닌 응답
    pub async fn exchange_code_for_tokens(&self, authorization_code: &str) -> AppResult<TokenResponse> {
        let url = format!(
            "{}?grant_type=authorization_code&code={}",
            self.config.endpoint(endpoints::TOKEN_SERVICE),
            urlencoding::encode(authorization_code)
        );
        let authorization = format!(
            "Basic {}",
            basic_auth_credentials(&self.config.client_id, &self.config.client_secret)
        );

        let map = self
            .transport
            .call(&url, Method::POST, Some(&authorization))
            .await?;

        info!("🔑 토큰 교환 완료 ({}개 필드)", map.len());
        Ok(OidcResponse::from(map))
    }

    /// 액세스 토큰으로 사용자 정보를 조회합니다.
    ///
    /// `GET userinfo?schema=openid`, `Authorization: Bearer <access_token>`
    pub async fn fetch_user_info(&self, access_token: &str) -> AppResult<UserInfoResponse> {
        let url = format!("{}?schema=openid", self.config.endpoint(endpoints::USER_INFO));
        let authorization = format!("Bearer {}", access_token);

        let map = self
            .transport
            .call(&url, Method::GET, Some(&authorization))
            .await?;

        info!("👤 사용자 정보 조회 완료 ({}개 클레임)", map.len());
        Ok(OidcResponse::from(map))
    }

    /// 토큰이 아직 유효한지 프로바이더의 checkid 엔드포인트로 확인합니다.
    ///
    /// `GET checkid?access_token=<id_token>`, Authorization 헤더 없음.
    ///
    /// 파라미터 이름은 `access_token`이지만 ID 토큰을 전달합니다. 프로바이더의 실제 계약이
    /// 확인되기 전까지 이 동작을 그대로 유지합니다.
    pub async fn check_id_token(&self, id_token: &str) -> AppResult<CheckIdResponse> {
        let url = format!(
            "{}?access_token={}",
            self.config.endpoint(endpoints::CHECK_ID),
            urlencoding::encode(id_token)
        );

        let map = self.transport.call(&url, Method::GET, None).await?;

        info!("🔍 checkid 응답 수신 ({}개 필드)", map.len());
        Ok(OidcResponse::from(map))
    }

    /// 세션 종료 URL을 만듭니다.
    ///
    /// `endsession?id_token=<id_token>&logout=true&redirect_uri=<redirect_uri>`
    pub fn build_logout_url(&self, id_token: &str) -> String {
        format!(
            "{}?id_token={}&logout=true&redirect_uri={}",
            self.config.endpoint(endpoints::END_SESSION),
            urlencoding::encode(id_token),
            self.config.redirect_uri
        )
    }

    /// ID 토큰의 `aud`, `nonce` 바인딩을 로컬에서 확인합니다.
    ///
    /// 서명은 검증하지 않습니다. 자세한 규칙은 [`id_token_service`]를 참고하세요.
    pub fn inspect_id_token(&self, id_token: &str, expected_nonce: &Nonce) -> AppResult<IdTokenClaims> {
        id_token_service::inspect_id_token(id_token, &self.config.client_id, expected_nonce)
    }
}
