//! 에러 타입 모듈
//!
//! - [`errors`] - `AppError` 열거형, `AppResult` 별칭, `ErrorContext` 확장 trait

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
