//! 목 프로바이더 서버
//!
//! 외부 프로바이더 없이 인가 코드 플로우를 테스트하기 위한 wiremock 헬퍼입니다.

#![allow(dead_code)]

use std::time::Duration;

use oidc_access_client::config::OidcClientConfig;
use oidc_access_client::services::oidc::OidcService;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "app-1";
pub const CLIENT_SECRET: &str = "secret";
pub const REDIRECT_URI: &str = "https://cb";

/// `app-1:secret`의 Base64
pub const BASIC_CREDENTIALS: &str = "YXBwLTE6c2VjcmV0";

pub const BASE_PATH: &str = "/webapps/auth/protocol/openidconnect/v1";

pub fn endpoint_path(name: &str) -> String {
    format!("{}/{}", BASE_PATH, name)
}

pub fn config_for(server: &MockServer) -> OidcClientConfig {
    OidcClientConfig::new(CLIENT_ID, CLIENT_SECRET, REDIRECT_URI)
        .with_provider_base_url(format!("{}{}", server.uri(), BASE_PATH))
}

pub fn service_for(server: &MockServer) -> OidcService {
    OidcService::new(config_for(server)).unwrap()
}

pub fn service_with_read_timeout(server: &MockServer, read_timeout: Duration) -> OidcService {
    let config = config_for(server).with_timeouts(Duration::from_secs(5), read_timeout);
    OidcService::new(config).unwrap()
}

/// 엔드포인트가 JSON 본문을 돌려주도록 설정
pub async fn mount_json(server: &MockServer, http_method: &str, endpoint: &str, status: u16, body: Value) {
    Mock::given(method(http_method))
        .and(path(endpoint_path(endpoint)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// 엔드포인트가 임의의 문자열 본문을 돌려주도록 설정
pub async fn mount_raw(server: &MockServer, http_method: &str, endpoint: &str, status: u16, body: &str) {
    Mock::given(method(http_method))
        .and(path(endpoint_path(endpoint)))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// 200 헤더를 먼저 보내고 본문을 `gap` 간격으로 나눠 보내는 서버를 띄웁니다
///
/// 반환값은 `with_provider_base_url`에 넘길 기본 경로입니다. 요청 하나만 처리합니다.
pub async fn spawn_slow_body_server(chunks: Vec<&'static str>, gap: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let content_length: usize = chunks.iter().map(|c| c.len()).sum();
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            content_length
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.flush().await.unwrap();

        for chunk in chunks {
            tokio::time::sleep(gap).await;
            if socket.write_all(chunk.as_bytes()).await.is_err() {
                return;
            }
            let _ = socket.flush().await;
        }
    });

    format!("http://{}{}", addr, BASE_PATH)
}

pub fn service_with_base_url(base_url: &str, read_timeout: Duration) -> OidcService {
    let config = OidcClientConfig::new(CLIENT_ID, CLIENT_SECRET, REDIRECT_URI)
        .with_provider_base_url(base_url)
        .with_timeouts(Duration::from_secs(5), read_timeout);
    OidcService::new(config).unwrap()
}
