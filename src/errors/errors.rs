//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! OpenID Connect 플로우의 각 단계에서 발생할 수 있는 실패를 하나의 열거형으로 통합합니다.
//! `thiserror`로 `Error` trait을 구현하고, 드라이버(CLI)는 [`AppError::exit_code`]로
//! 실패 종류별 종료 코드를 결정합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! fn require_token(map: &ResponseMap) -> AppResult<&str> {
//!     map.get("access_token")
//!         .and_then(|v| v.as_str())
//!         .ok_or_else(|| AppError::MissingFieldError("access_token".to_string()))
//! }
//! ```
//!
//! ## 종료 코드 매핑
//!
//! | AppError | Exit code | 사용 시나리오 |
//! |----------|-----------|---------------|
//! | `ConfigError` | 2 | 필수 환경 변수 누락, 타임아웃 파싱 실패 |
//! | `InputError` | 3 | 표준 입력에서 인증 코드를 읽지 못함 |
//! | `TransportError` | 4 | DNS, 연결 거부, 타임아웃, 잘못된 URL |
//! | `HttpStatusError` | 5 | 200 이외의 HTTP 응답 |
//! | `DecodeError` | 6 | JSON 객체가 아닌 응답 본문 |
//! | `MissingFieldError` | 7 | 응답에 필요한 필드가 없음 |
//! | `TokenValidationError` | 8 | ID 토큰의 nonce/aud 불일치 |

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 실패는 호출자에게 전달되며, 중간 계층에서 출력 후 무시되지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 설정 에러 (필수 값 누락, 파싱 실패)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 사용자 입력 에러 (표준 입력 읽기 실패)
    #[error("Input error: {0}")]
    InputError(String),

    /// 네트워크 계층 에러
    ///
    /// 연결 실패, DNS 실패, 타임아웃, 잘못된 URL 등 응답 상태 코드를 받기 전의 모든 실패입니다.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// 200 이외의 HTTP 응답
    ///
    /// 프로바이더가 돌려준 본문은 진단용으로만 보관하며, 부분 결과는 반환하지 않습니다.
    #[error("HTTP error code: {status}")]
    HttpStatusError {
        /// 관측된 HTTP 상태 코드
        status: u16,
        /// 응답 본문 (진단용)
        body: String,
    },

    /// 응답 본문이 JSON 객체가 아님
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// 응답 맵에 필수 필드가 없거나 문자열이 아님
    #[error("Missing field: {0}")]
    MissingFieldError(String),

    /// ID 토큰 검사 실패
    #[error("Token validation error: {0}")]
    TokenValidationError(String),
}

impl AppError {
    /// 프로세스 종료 코드를 반환합니다.
    ///
    /// 성공은 0이며, 실패 종류마다 고유한 0이 아닌 값을 사용합니다.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::ConfigError(_) => 2,
            AppError::InputError(_) => 3,
            AppError::TransportError(_) => 4,
            AppError::HttpStatusError { .. } => 5,
            AppError::DecodeError(_) => 6,
            AppError::MissingFieldError(_) => 7,
            AppError::TokenValidationError(_) => 8,
        }
    }

    /// HTTP 상태 코드 에러라면 상태 코드를 반환합니다.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::HttpStatusError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// 변환 대상 variant를 생성자로 넘겨받아 컨텍스트 메시지와 원인을 함께 담습니다.
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, kind: fn(String) -> AppError, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, kind: fn(String) -> AppError, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, kind: fn(String) -> AppError, msg: &str) -> AppResult<T> {
        self.map_err(|e| kind(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, kind: fn(String) -> AppError, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| kind(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_non_zero() {
        let errors = [
            AppError::ConfigError("x".to_string()),
            AppError::InputError("x".to_string()),
            AppError::TransportError("x".to_string()),
            AppError::HttpStatusError { status: 401, body: String::new() },
            AppError::DecodeError("x".to_string()),
            AppError::MissingFieldError("x".to_string()),
            AppError::TokenValidationError("x".to_string()),
        ];

        let mut codes: Vec<u8> = errors.iter().map(AppError::exit_code).collect();
        assert!(codes.iter().all(|&c| c != 0));

        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_http_status_error_display() {
        let error = AppError::HttpStatusError {
            status: 400,
            body: r#"{"error":"invalid_grant"}"#.to_string(),
        };

        assert_eq!(error.to_string(), "HTTP error code: 400");
        assert_eq!(error.status(), Some(400));
        assert_eq!(AppError::DecodeError("x".to_string()).status(), None);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context(AppError::TransportError, "Additional context");

        if let Err(AppError::TransportError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected TransportError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let ok: Result<u8, &str> = Ok(1);
        let value = ok
            .with_context(AppError::DecodeError, || panic!("must not be evaluated"))
            .unwrap();
        assert_eq!(value, 1);

        let err: Result<u8, &str> = Err("boom");
        match err.with_context(AppError::DecodeError, || "step 3".to_string()) {
            Err(AppError::DecodeError(msg)) => assert_eq!(msg, "step 3: boom"),
            other => panic!("Expected DecodeError, got {:?}", other),
        }
    }
}
