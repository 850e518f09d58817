//! 자격 증명 및 nonce 유틸리티
//!
//! 토큰 서비스 호출에 필요한 Basic 인증 값과 인증 요청마다 새로 만드는 nonce를 생성합니다.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use rand::Rng;

use crate::domain::models::Nonce;

/// nonce 생성에 사용하는 난수 바이트 수
pub const NONCE_BYTES: usize = 16;

/// `client_id:client_secret`을 Base64로 인코딩합니다.
///
/// 반환값에는 스킴 라벨이 포함되지 않습니다. 헤더로 사용할 때는 호출자가 `"Basic "`을 붙입니다.
/// 인코딩 결과에 줄바꿈 문자가 들어가지 않도록 `\r`, `\n`을 모두 제거합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let credentials = basic_auth_credentials("a", "b");
/// assert_eq!(credentials, "YTpi");
/// let header = format!("Basic {}", credentials);
/// ```
pub fn basic_auth_credentials(client_id: &str, client_secret: &str) -> String {
    let auth_string = format!("{}:{}", client_id, client_secret);

    STANDARD
        .encode(auth_string.as_bytes())
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .collect()
}

/// 인증 요청마다 새로운 nonce를 생성합니다.
///
/// 스레드 로컬 CSPRNG에서 16바이트를 뽑아 URL-safe Base64(패딩 없음)로 인코딩합니다.
/// 타임스탬프에 의존하지 않으므로 같은 밀리초에 생성된 값끼리도 충돌하지 않습니다.
pub fn generate_nonce() -> Nonce {
    let mut bytes = [0u8; NONCE_BYTES];
    rand::thread_rng().fill(&mut bytes);

    Nonce::new(URL_SAFE_NO_PAD.encode(bytes))
}
