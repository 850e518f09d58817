//! 터미널 출력 포맷팅 유틸리티
//!
//! CLI 드라이버가 각 플로우 단계와 응답 맵을 출력할 때 사용하는 함수들을 제공합니다.
//! 출력 문자열은 `format_*` 함수로 만들고, `print_*` 함수는 표준 출력에 쓰기만 합니다.

use serde_json::Value;

use crate::domain::models::ResponseMap;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Unicode 박스 문자를 사용하여 시각적으로 눈에 띄는 제목을 출력합니다.
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               OpenID Connect Client              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// Output:
/// ```text
/// → Step 2: Exchange authorization code
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// `count`는 응답 맵의 항목 수처럼 단계가 만들어낸 결과의 크기입니다.
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 진행 단계 실패를 표시합니다
pub fn print_step_failed(step: u8, description: &str, cause: &str) {
    eprintln!("✗ Step {}: {} failed: {}", step, description, cause);
}

/// 서브 항목을 트리 형태로 표시합니다
///
/// Output:
/// ```text
///    ├─ Access token: AT1
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 응답 맵을 섹션 헤더와 함께 `key value` 줄로 출력합니다
///
/// Output:
/// ```text
///  ****** User Info endpoint *****
/// email user@example.com
/// name Jane Doe
/// ```
pub fn print_response_section(title: &str, map: &ResponseMap) {
    println!(" ***** {} ***** ", title);
    for line in format_entries(map) {
        println!("{}", line);
    }
}

/// 응답 맵의 각 항목을 `key value` 문자열로 변환합니다
///
/// 문자열 값은 따옴표 없이, 그 밖의 값(숫자, 불리언, 중첩 객체/배열)은 JSON 표기로 출력합니다.
pub fn format_entries(map: &ResponseMap) -> Vec<String> {
    map.iter()
        .map(|(key, value)| format!("{} {}", key, format_value(value)))
        .collect()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
