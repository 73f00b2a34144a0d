//! TXT 리포트 직렬화
//!
//! 동일한 `AnalysisResult`에 대해 항상 바이트 단위로 동일한 출력을 생성합니다.

use std::fmt::Write;

use crate::domain::analysis::dto::AnalysisResult;

/// 분석 결과를 평문 리포트로 직렬화
pub fn to_plain_text(result: &AnalysisResult, field: &str) -> String {
    let mut content = format!("[비즈니스 기회 발견 매트릭스 리포트 - {}]\n\n", field);

    for row in &result.matrix {
        let _ = writeln!(content, "전략: {}", row.strategy.as_str());
        let _ = writeln!(
            content,
            "- 생존형: {}\n  {}",
            row.survival.name, row.survival.description
        );
        let _ = writeln!(
            content,
            "- 창업가형: {}\n  {}",
            row.entrepreneur.name, row.entrepreneur.description
        );
        let _ = writeln!(
            content,
            "- 전문가형: {}\n  {}",
            row.expert.name, row.expert.description
        );
        content.push('\n');
    }

    content
}

/// 다운로드 파일명 생성 (`biz-report-<분야>.txt`)
///
/// 경로 구분자만 치환하며, 한글 등 비 ASCII 문자는 그대로 유지합니다.
pub fn file_name(field: &str) -> String {
    let safe: String = field
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();
    format!("biz-report-{}.txt", safe)
}

/// Content-Disposition 헤더 값 생성
///
/// 헤더는 ASCII만 담을 수 있으므로 실제 파일명은 RFC 5987 `filename*`
/// 파라미터에 UTF-8 percent-encoding으로 싣습니다.
pub fn content_disposition(field: &str) -> String {
    format!(
        "attachment; filename=\"biz-report.txt\"; filename*=UTF-8''{}",
        percent_encode(&file_name(field))
    )
}

/// RFC 5987 value-chars 기준 percent-encoding
fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        match byte {
            b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => {
                let _ = write!(encoded, "%{:02X}", byte);
            }
        }
    }
    encoded
}
