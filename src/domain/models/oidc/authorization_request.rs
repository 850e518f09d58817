//! 인가 요청 모델
//!
//! 사용자가 브라우저에 붙여넣을 `authorize` URL을 구성합니다.
//! 이 프로세스는 리디렉션을 직접 처리하지 않으며, 사용자가 받은 코드를 수동으로 입력합니다.

use crate::domain::models::oidc::Nonce;
use crate::utils::credentials::generate_nonce;

/// 인가 코드 플로우의 `response_type`
pub const RESPONSE_TYPE_CODE: &str = "code";

/// 요청하는 스코프 (공백 구분, 인코딩하지 않고 그대로 사용)
pub const DEFAULT_SCOPE: &str = "openid profile email address";

/// 한 번 조립되면 변경되지 않는 인가 요청 값
///
/// 요청마다 새 [`Nonce`]를 가지며 저장되지 않습니다. 드라이버는 이 값을 보관했다가
/// ID 토큰의 `nonce` 클레임과 비교할 수 있습니다.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    client_id: String,
    response_type: &'static str,
    scope: &'static str,
    nonce: Nonce,
    redirect_uri: String,
}

impl AuthorizationRequest {
    /// 새 nonce와 함께 인가 요청을 조립합니다.
    pub fn new(client_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self::with_nonce(client_id, redirect_uri, generate_nonce())
    }

    /// 지정한 nonce로 인가 요청을 조립합니다.
    pub fn with_nonce(
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
        nonce: Nonce,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            response_type: RESPONSE_TYPE_CODE,
            scope: DEFAULT_SCOPE,
            nonce,
            redirect_uri: redirect_uri.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn response_type(&self) -> &str {
        self.response_type
    }

    pub fn scope(&self) -> &str {
        self.scope
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// `authorize` 엔드포인트에 대한 전체 URL을 만듭니다.
    ///
    /// 파라미터 순서는 `client_id`, `response_type`, `scope`, `nonce`, `redirect_uri` 입니다.
    /// `client_id`, `scope`, `redirect_uri`는 프로바이더 등록 값과 바이트 단위로 일치해야 하므로
    /// 퍼센트 인코딩하지 않습니다. nonce는 URL-safe 문자만 사용합니다.
    pub fn to_url(&self, authorize_endpoint: &str) -> String {
        format!(
            "{}?client_id={}&response_type={}&scope={}&nonce={}&redirect_uri={}",
            authorize_endpoint,
            self.client_id,
            self.response_type,
            self.scope,
            self.nonce,
            self.redirect_uri,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_url_literal_parameters() {
        let request = AuthorizationRequest::with_nonce("app-1", "https://cb", Nonce::new("abc"));
        let url = request.to_url("https://idp/v1/authorize");

        assert_eq!(
            url,
            "https://idp/v1/authorize?client_id=app-1&response_type=code\
             &scope=openid profile email address&nonce=abc&redirect_uri=https://cb"
        );
    }

    #[test]
    fn test_new_generates_fresh_nonce() {
        let first = AuthorizationRequest::new("app-1", "https://cb");
        let second = AuthorizationRequest::new("app-1", "https://cb");

        assert_ne!(first.nonce(), second.nonce());
        assert_eq!(first.response_type(), "code");
        assert_eq!(first.scope(), DEFAULT_SCOPE);
        assert_eq!(first.client_id(), "app-1");
        assert_eq!(first.redirect_uri(), "https://cb");
    }
}
