use serde::Deserialize;
use serde_json::Value;

use crate::domain::models::oidc::ResponseMap;

/// `aud` 클레임: 문자열 하나 또는 배열
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<Value>),
    Other(Value),
}

/// 서명 검증 없이 디코딩한 ID 토큰 페이로드
///
/// JWKS 조회를 하지 않으므로 서명은 확인하지 않습니다. `nonce`, `aud` 같은
/// 요청과의 바인딩만 확인하는 용도입니다. 표준 클레임 외의 값은 `extra`에 남습니다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdTokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub iss: Option<String>,
    #[serde(default)]
    pub aud: Option<Audience>,
    #[serde(default)]
    pub nonce: Option<String>,
    #[serde(flatten)]
    pub extra: ResponseMap,
}

impl IdTokenClaims {
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    pub fn issuer(&self) -> Option<&str> {
        self.iss.as_deref()
    }

    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    /// `aud` 클레임 목록
    ///
    /// 문자열 하나 또는 문자열 배열 모두 허용합니다. 배열 안의 문자열이 아닌 값은 무시합니다.
    pub fn audiences(&self) -> Vec<&str> {
        match &self.aud {
            Some(Audience::Single(aud)) => vec![aud.as_str()],
            Some(Audience::Multiple(values)) => values.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// 페이로드의 클레임 개수
    pub fn len(&self) -> usize {
        let standard = [
            self.sub.is_some(),
            self.iss.is_some(),
            self.aud.is_some(),
            self.nonce.is_some(),
        ];
        standard.iter().filter(|present| **present).count() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
