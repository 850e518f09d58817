//! 응답 본문 디코더
//!
//! 모든 엔드포인트 응답을 같은 방식으로 해석합니다. 최상위가 JSON 객체인 본문만 허용하며,
//! 값은 원래의 JSON 타입(문자열, 숫자, 불리언, 중첩 객체/배열)을 유지합니다.
//! 필드 존재 여부는 이 계층에서 검사하지 않습니다.

use serde_json::Value;

use crate::domain::models::ResponseMap;
use crate::errors::{AppError, AppResult, ErrorContext};

/// 응답 본문을 문자열 키 맵으로 디코딩합니다.
///
/// # Errors
///
/// * `AppError::DecodeError` - 유효한 JSON이 아니거나 최상위가 객체가 아닌 경우
///
/// # Examples
///
/// ```rust,ignore
/// let map = decode(r#"{"access_token":"AT1"}"#)?;
/// assert_eq!(map["access_token"], "AT1");
///
/// assert!(decode("not-json").is_err());
/// ```
pub fn decode(raw_body: &str) -> AppResult<ResponseMap> {
    let value = serde_json::from_str::<Value>(raw_body)
        .context(AppError::DecodeError, "응답 JSON 파싱 실패")?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::DecodeError(format!(
            "응답 최상위가 JSON 객체가 아닙니다: {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_object_preserves_types() {
        let map = decode(
            r#"{"access_token":"AT1","expires_in":28800,"verified":true,
                "address":{"country":"KR"},"scopes":["openid","email"],"extra":null}"#,
        )
        .unwrap();

        assert_eq!(map["access_token"], json!("AT1"));
        assert_eq!(map["expires_in"], json!(28800));
        assert_eq!(map["verified"], json!(true));
        assert_eq!(map["address"], json!({ "country": "KR" }));
        assert_eq!(map["scopes"], json!(["openid", "email"]));
        assert_eq!(map["extra"], Value::Null);
    }

    #[test]
    fn test_decode_empty_object() {
        assert!(decode("{}").unwrap().is_empty());
    }

    #[test]
    fn test_decode_not_json() {
        assert!(matches!(decode("not-json"), Err(AppError::DecodeError(_))));
    }

    #[test]
    fn test_decode_empty_body() {
        assert!(matches!(decode(""), Err(AppError::DecodeError(_))));
    }

    #[test]
    fn test_decode_truncated_object() {
        assert!(matches!(
            decode(r#"{"access_token":"AT1""#),
            Err(AppError::DecodeError(_))
        ));
    }

    #[test]
    fn test_decode_non_object_top_level() {
        for body in [r#"["a","b"]"#, r#""text""#, "42", "null", "true"] {
            match decode(body) {
                Err(AppError::DecodeError(msg)) => assert!(msg.contains("객체가 아닙니다")),
                other => panic!("body {} should fail, got {:?}", body, other),
            }
        }
    }
}
