//! HTTP 전송 계층
//!
//! 엔드포인트 하나에 대한 요청 한 번을 수행하고, 성공 시 디코딩된 응답 맵을 반환합니다.
//!
//! ## 에러 정책
//!
//! | 상황 | 결과 |
//! |------|------|
//! | 200 OK + JSON 객체 | `Ok(ResponseMap)` |
//! | 200 이외의 상태 코드 | `AppError::HttpStatusError` |
//! | DNS/연결/타임아웃/잘못된 URL | `AppError::TransportError` |
//! | 본문이 JSON 객체가 아님 | `AppError::DecodeError` |
//!
//! 재시도는 하지 않습니다. 연결은 호출마다 새로 열리며, 유휴 연결을 풀에 남기지 않습니다.

use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode};

use crate::config::OidcClientConfig;
use crate::domain::models::ResponseMap;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::http::decoder::decode;

/// 단발성 HTTP 호출을 수행하는 전송 계층
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// 연결/읽기 타임아웃을 적용한 전송 계층을 생성합니다.
    ///
    /// 읽기 타임아웃은 개별 읽기 사이의 최대 대기 시간입니다. 본문이 계속 도착하는 동안에는
    /// 전체 수신 시간이 길어져도 실패하지 않으며, 연결 타임아웃과는 독립적입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TransportError` - TLS 백엔드 초기화 실패 등 클라이언트 생성 실패
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .pool_max_idle_per_host(0)
            .build()
            .context(AppError::TransportError, "HTTP 클라이언트 생성 실패")?;

        Ok(Self { client })
    }

    /// 설정의 타임아웃 값으로 전송 계층을 생성합니다.
    pub fn from_config(config: &OidcClientConfig) -> AppResult<Self> {
        Self::new(config.connect_timeout, config.read_timeout)
    }

    /// 요청 한 번을 수행하고 응답 본문을 디코딩합니다.
    ///
    /// `authorization`이 주어지면 `Authorization` 헤더 값으로 그대로 사용합니다.
    /// `Accept: application/json`은 항상 전송합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TransportError` - 응답을 받기 전 실패 또는 본문 수신 실패
    /// * `AppError::HttpStatusError` - 200 이외의 상태 코드
    /// * `AppError::DecodeError` - 본문이 JSON 객체가 아님
    pub async fn call(
        &self,
        url: &str,
        method: Method,
        authorization: Option<&str>,
    ) -> AppResult<ResponseMap> {
        debug!("➡️ {} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(ACCEPT, "application/json");

        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }

        let response = request
            .send()
            .await
            .with_context(AppError::TransportError, || format!("{} 요청 실패", method))?;

        let status = response.status();
        if status != StatusCode::OK {
            // 본문은 진단용이므로 읽기 실패 시 빈 본문으로 진행
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("{} 에러 응답 본문 수신 실패: {}", status.as_u16(), e);
                    String::new()
                }
            };
            warn!("⚠️ {} 응답 상태 {}", method, status.as_u16());
            return Err(AppError::HttpStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .context(AppError::TransportError, "응답 본문 수신 실패")?;

        debug!("⬅️ {} {} ({} bytes)", status.as_u16(), method, body.len());

        decode(&body)
    }
}
