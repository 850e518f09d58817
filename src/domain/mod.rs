//! 도메인 계층
//!
//! 프로바이더와 주고받는 값 타입을 정의합니다. 네트워크나 출력에 의존하지 않습니다.

pub mod models;

pub use models::*;
