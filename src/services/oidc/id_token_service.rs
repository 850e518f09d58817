//! ID 토큰 로컬 검사
//!
//! 프로바이더 메타데이터(JWKS)를 조회하지 않으므로 서명은 검증하지 않습니다.
//! 대신 페이로드를 디코딩하여 이 실행에서 보낸 인가 요청과의 바인딩을 확인합니다.
//!
//! - `aud` 클레임에 설정된 `client_id`가 포함되어야 합니다
//! - 토큰에 `nonce` 클레임이 있으면 인가 요청의 nonce와 같아야 합니다

use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::domain::models::{IdTokenClaims, Nonce};
use crate::errors::{AppError, AppResult};

/// 토큰이 `header.payload.signature` 형태의 JWT인지 확인합니다.
///
/// 불투명(opaque) ID 토큰을 발급하는 프로바이더도 있으므로 드라이버가 검사 여부를 결정할 때 사용합니다.
pub fn is_jwt(token: &str) -> bool {
    let parts: Vec<&str> = token.split('.').collect();
    parts.len() == 3 && parts[..2].iter().all(|part| !part.is_empty())
}

/// ID 토큰 페이로드를 서명 검증 없이 디코딩합니다.
///
/// # Errors
///
/// * `AppError::TokenValidationError` - JWT 형식이 아니거나 페이로드가 클레임 객체로 해석되지 않는 경우
pub fn decode_unverified(id_token: &str) -> AppResult<IdTokenClaims> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<IdTokenClaims>(id_token, &DecodingKey::from_secret(&[]), &validation)
        .map(|token_data| token_data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::InvalidToken => {
                AppError::TokenValidationError("ID 토큰이 JWT 형식이 아닙니다".to_string())
            }
            _ => AppError::TokenValidationError(format!("ID 토큰 디코딩 실패: {}", e)),
        })
}

/// ID 토큰을 디코딩하고 인가 요청과의 바인딩을 확인합니다.
///
/// # Errors
///
/// * `AppError::TokenValidationError` - 디코딩 실패, `aud` 불일치, `nonce` 불일치
pub fn inspect_id_token(
    id_token: &str,
    client_id: &str,
    expected_nonce: &Nonce,
) -> AppResult<IdTokenClaims> {
    let claims = decode_unverified(id_token)?;

    if !claims.audiences().contains(&client_id) {
        return Err(AppError::TokenValidationError(format!(
            "aud 클레임에 client_id '{}'가 없습니다",
            client_id
        )));
    }

    if let Some(nonce) = claims.nonce() {
        if nonce != expected_nonce.as_str() {
            return Err(AppError::TokenValidationError(
                "nonce 클레임이 인가 요청의 nonce와 다릅니다".to_string(),
            ));
        }
    }

    Ok(claims)
}
