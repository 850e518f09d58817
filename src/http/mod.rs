//! HTTP 통신 모듈
//!
//! - [`transport`] - 단발성 GET/POST 호출, 타임아웃, 상태 코드 검사
//! - [`decoder`] - 응답 본문을 JSON 객체 맵으로 디코딩

pub mod decoder;
pub mod transport;

pub use decoder::decode;
pub use transport::HttpTransport;
