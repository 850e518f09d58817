//! # 환경별 .env 파일 로드
//!
//! `PROFILE` 값에 맞는 `.env` 파일을 프로세스 환경 변수로 읽어들입니다.
//!
//! | PROFILE | 파일 |
//! |---------|------|
//! | `prod` | `.env.prod` |
//! | `dev` | `.env.dev` |
//! | 기타 또는 미설정 | `.env` |
//!
//! 로거는 `RUST_LOG`를 환경 변수에서 읽으므로 이 로드는 로거 초기화보다 먼저 실행되어야
//! 합니다. 그래서 로드 결과는 바로 로그로 남기지 않고 [`EnvFileLoad`]로 돌려주며,
//! 로거 초기화 뒤에 [`EnvFileLoad::log`]로 기록합니다.

use std::path::Path;

use log::{debug, info, warn};

/// 프로필 선택 환경 변수
pub const PROFILE_KEY: &str = "PROFILE";

/// `.env` 파일 로드 결과
#[derive(Debug, Clone, PartialEq)]
pub struct EnvFileLoad {
    pub profile: String,
    pub file: &'static str,
    pub result: Result<(), String>,
}

impl EnvFileLoad {
    pub fn is_loaded(&self) -> bool {
        self.result.is_ok()
    }

    /// 로드 결과를 기록합니다.
    ///
    /// 기본 프로필에서 `.env`가 없는 것은 흔한 경우이므로 `debug!`로만 남깁니다.
    pub fn log(&self) {
        let profile = if self.profile.is_empty() { "default" } else { self.profile.as_str() };
        info!("Current profile: {}", profile);

        match &self.result {
            Ok(()) => info!("{} 파일 로드 됨", self.file),
            Err(e) if self.profile.is_empty() => debug!("{} 파일 로드 안 됨: {}", self.file, e),
            Err(e) => warn!("{} 파일 로드 실패: {}", self.file, e),
        }
    }
}

/// 프로필에 해당하는 파일 이름
pub fn env_file_name(profile: &str) -> &'static str {
    match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}

/// `dir`에서 프로필에 맞는 `.env` 파일을 로드합니다.
///
/// 파일이 없어도 실패하지 않고 결과에 담아 돌려줍니다. 이미 설정된 환경 변수가 우선합니다.
pub fn load_env_file(dir: &Path, profile: &str) -> EnvFileLoad {
    let file = env_file_name(profile);
    let result = dotenv::from_path(dir.join(file)).map_err(|e| e.to_string());

    EnvFileLoad {
        profile: profile.to_string(),
        file,
        result,
    }
}

/// `PROFILE` 환경 변수를 읽어 현재 디렉터리의 `.env` 파일을 로드합니다.
pub fn load_profile_env() -> EnvFileLoad {
    let profile = std::env::var(PROFILE_KEY).unwrap_or_default();
    load_env_file(Path::new("."), &profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::credentials::generate_nonce;
    use std::fs;
    use std::path::PathBuf;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("oidc-env-{}", generate_nonce()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_env_file_name() {
        assert_eq!(env_file_name("prod"), ".env.prod");
        assert_eq!(env_file_name("dev"), ".env.dev");
        assert_eq!(env_file_name(""), ".env");
        assert_eq!(env_file_name("staging"), ".env");
    }

    #[test]
    fn test_load_sets_process_environment() {
        let dir = temp_dir();
        fs::write(
            dir.join(".env.dev"),
            "OIDC_ENV_FILE_TEST_LOG_LEVEL=oidc_access_client=debug\n",
        )
        .unwrap();

        let load = load_env_file(&dir, "dev");

        assert!(load.is_loaded());
        assert_eq!(load.file, ".env.dev");
        assert_eq!(
            std::env::var("OIDC_ENV_FILE_TEST_LOG_LEVEL").unwrap(),
            "oidc_access_client=debug"
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_existing_variable_is_not_overridden() {
        let dir = temp_dir();
        fs::write(dir.join(".env"), "OIDC_ENV_FILE_TEST_KEEP=first\n").unwrap();
        fs::write(dir.join(".env.prod"), "OIDC_ENV_FILE_TEST_KEEP=second\n").unwrap();

        assert!(load_env_file(&dir, "").is_loaded());
        assert!(load_env_file(&dir, "prod").is_loaded());

        assert_eq!(std::env::var("OIDC_ENV_FILE_TEST_KEEP").unwrap(), "first");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = temp_dir();

        let load = load_env_file(&dir, "prod");

        assert!(!load.is_loaded());
        assert_eq!(load.profile, "prod");
        assert!(load.result.is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
