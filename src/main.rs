//! OpenID Connect 클라이언트 메인 애플리케이션
//!
//! 인가 코드 플로우를 순서대로 실행합니다. 인가 코드는 사용자가 브라우저에서 받아
//! 표준 입력으로 붙여넣습니다. 각 단계는 이전 단계의 결과를 입력으로 받으므로
//! 단일 스레드 런타임에서 하나씩 await 합니다.

use std::process::ExitCode;

use env_logger::Env;
use log::{error, info, warn};
use oidc_access_client::config::{load_profile_env, OidcClientConfig};
use oidc_access_client::errors::{AppError, AppResult, ErrorContext};
use oidc_access_client::services::oidc::id_token_service::is_jwt;
use oidc_access_client::services::oidc::OidcService;
use oidc_access_client::utils::display_terminal::{
    print_boxed_title, print_response_section, print_step_complete, print_step_failed,
    print_step_start, print_sub_task,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // RUST_LOG이 .env에 있을 수 있으므로 로거보다 먼저 로드
    let env_load = load_profile_env();
    init_logging();
    env_load.log();

    info!("🚀 OpenID Connect 클라이언트 시작중...");

    match run().await {
        Ok(()) => {
            info!("✅ 모든 단계가 성공적으로 완료되었습니다!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// 플로우 전체를 실행합니다
///
/// 단계 순서는 고정입니다: 인가 URL → 코드 입력 → 토큰 교환 → ID 토큰 검사 →
/// 사용자 정보 → checkid → 로그아웃 URL. 어느 단계든 실패하면 즉시 중단합니다.
async fn run() -> AppResult<()> {
    print_boxed_title("OpenID Connect Client");

    let config = report(0, "Load configuration", OidcClientConfig::from_env())?;
    info!("⚙️ 설정 로드됨: {:?}", config);
    let service = OidcService::new(config)?;

    // 1. 인가 URL
    print_step_start(1, "Build authorization URL");
    let request = service.new_authorization_request();
    println!("Paste this url in your browser: {}", service.authorization_url(&request));
    print_step_complete(1, "Build authorization URL", 1);

    // 2. 코드 입력 후 토큰 교환
    println!("Type the code you received here: ");
    let code = report(2, "Read authorization code", read_authorization_code().await)?;

    print_step_start(2, "Exchange authorization code");
    let tokens = report(
        2,
        "Exchange authorization code",
        service.exchange_code_for_tokens(&code).await,
    )?;
    let access_token = report(2, "Exchange authorization code", tokens.access_token())?;
    let id_token = report(2, "Exchange authorization code", tokens.id_token())?;
    print_sub_task("Access token for this request", access_token);
    print_sub_task("Id token for this request", id_token);
    print_step_complete(2, "Exchange authorization code", tokens.len());

    // 3. ID 토큰 바인딩 검사
    print_step_start(3, "Inspect id token");
    if is_jwt(id_token) {
        let claims = report(
            3,
            "Inspect id token",
            service.inspect_id_token(id_token, request.nonce()),
        )?;
        print_sub_task("Subject", claims.subject().unwrap_or("-"));
        print_step_complete(3, "Inspect id token", claims.len());
    } else {
        warn!("⚠️ ID 토큰이 JWT 형식이 아니므로 로컬 검사를 건너뜁니다");
        print_sub_task("Inspect id token", "skipped (opaque token)");
    }

    // 4. 사용자 정보
    print_step_start(4, "User info endpoint");
    let user_info = report(4, "User info endpoint", service.fetch_user_info(access_token).await)?;
    print_response_section("User Info endpoint", user_info.as_map());
    print_step_complete(4, "User info endpoint", user_info.len());

    // 5. checkid
    print_step_start(5, "Check id endpoint");
    let check_id = report(5, "Check id endpoint", service.check_id_token(id_token).await)?;
    print_response_section("Check Id Endpoint", check_id.as_map());
    print_step_complete(5, "Check id endpoint", check_id.len());

    // 6. 로그아웃 URL
    print_step_start(6, "End session endpoint");
    println!(
        "Put this URL on browser to end session {}",
        service.build_logout_url(id_token)
    );
    print_step_complete(6, "End session endpoint", 1);

    Ok(())
}

/// 단계 실패를 진단 메시지로 남기고 에러를 그대로 전달합니다
fn report<T>(step: u8, description: &str, result: AppResult<T>) -> AppResult<T> {
    if let Err(e) = &result {
        error!("단계 {} ({}) 실패: {}", step, description, e);
        if let AppError::HttpStatusError { body, .. } = e {
            if !body.is_empty() {
                error!("프로바이더 응답: {}", body);
            }
        }
        print_step_failed(step, description, &e.to_string());
    }
    result
}

/// 표준 입력에서 인가 코드 한 줄을 읽습니다
///
/// 앞뒤 공백은 제거합니다. 빈 코드는 로컬에서 거절하지 않고 프로바이더에 그대로 전달합니다.
///
/// # Errors
///
/// * `AppError::InputError` - 입력 스트림이 닫혔거나 읽기 실패
async fn read_authorization_code() -> AppResult<String> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    lines
        .next_line()
        .await
        .context(AppError::InputError, "인가 코드 읽기 실패")?
        .map(|line| line.trim().to_string())
        .ok_or_else(|| AppError::InputError("입력 스트림이 닫혔습니다".to_string()))
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// ```bash
/// # HTTP 호출까지 확인
/// RUST_LOG=oidc_access_client=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
