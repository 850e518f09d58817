//! 프로바이더 응답 모델
//!
//! 토큰 서비스, 사용자 정보, checkid 엔드포인트는 모두 같은 형태의 JSON 객체를 돌려줍니다.
//! 스키마를 강제하지 않는 문자열 키 맵으로 보관하고, 드라이버가 필요로 하는 필드만
//! 접근자로 노출합니다. 프로바이더 고유 필드는 그대로 보존됩니다.

use serde_json::{Map, Value};

use crate::errors::{AppError, AppResult};

/// 디코딩된 JSON 객체
pub type ResponseMap = Map<String, Value>;

/// 토큰 서비스 응답
pub type TokenResponse = OidcResponse;

/// 사용자 정보 엔드포인트 응답
pub type UserInfoResponse = OidcResponse;

/// checkid 엔드포인트 응답
pub type CheckIdResponse = OidcResponse;

/// 스키마 없는 프로바이더 응답
///
/// 실행 중에만 존재하며 캐시되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OidcResponse(ResponseMap);

impl OidcResponse {
    pub fn new(map: ResponseMap) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// 문자열 값만 반환합니다. 키가 없거나 문자열이 아니면 `None` 입니다.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// 필수 문자열 필드를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingFieldError` - 키가 없거나 값이 문자열이 아닌 경우
    pub fn require_str(&self, key: &str) -> AppResult<&str> {
        self.get_str(key)
            .ok_or_else(|| AppError::MissingFieldError(key.to_string()))
    }

    /// `access_token` 필드
    pub fn access_token(&self) -> AppResult<&str> {
        self.require_str("access_token")
    }

    /// `id_token` 필드
    pub fn id_token(&self) -> AppResult<&str> {
        self.require_str("id_token")
    }

    pub fn as_map(&self) -> &ResponseMap {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ResponseMap> for OidcResponse {
    fn from(map: ResponseMap) -> Self {
        Self::new(map)
    }
}
