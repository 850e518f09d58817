use std::fmt;

/// 인증 요청 재전송 공격을 막기 위한 1회용 값
///
/// [`generate_nonce`](crate::utils::credentials::generate_nonce)로 생성하며,
/// 프로바이더는 이 값을 ID 토큰의 `nonce` 클레임에 그대로 돌려줍니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nonce(String);

impl Nonce {
    /// 이미 인코딩된 값으로 nonce를 만듭니다.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
