//! 리포트 HTML 렌더링
//!
//! 현재 `AnalysisResult`의 순수 렌더링입니다. 매트릭스 행마다 3개 페르소나
//! 셀을 출력하고, 부록으로 전략별 방법론 해설을 붙입니다. 모든 모델 생성
//! 텍스트는 이스케이프를 거칩니다.

use std::fmt::Write;

use crate::domain::analysis::dto::{AnalysisResult, Idea};

/// 분석 결과를 리포트 HTML 조각으로 렌더링
pub fn render_report(result: &AnalysisResult, field: &str) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<div class=\"report\">\n");

    // 인쇄 전용 리포트 헤더
    html.push_str(concat!(
        "<div class=\"print-header\">",
        "<p class=\"doc-label\">Internal Strategic Document</p>",
        "<h1>Business Opportunity Matrix Analysis</h1>",
        "</div>\n"
    ));

    let _ = write!(
        html,
        "<div class=\"report-meta\"><h3>비즈니스 기회 매트릭스 리포트</h3>\
         <p>분석 대상: <strong>{}</strong></p></div>\n",
        escape_html(field)
    );

    // 3x3 매트릭스 테이블
    html.push_str(concat!(
        "<table class=\"matrix\">\n<thead><tr>",
        "<th>Innovation Strategy</th>",
        "<th>Survival Type</th>",
        "<th>Entrepreneur Type</th>",
        "<th>Expert Type</th>",
        "</tr></thead>\n<tbody>\n"
    ));

    for row in &result.matrix {
        let _ = write!(
            html,
            "<tr class=\"matrix-row\"><td class=\"strategy\"><span>{}</span><small>{}</small></td>",
            row.strategy.as_str(),
            row.strategy.korean_label()
        );
        push_idea_cell(&mut html, &row.survival);
        push_idea_cell(&mut html, &row.entrepreneur);
        push_idea_cell(&mut html, &row.expert);
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");

    // 부록: 전략별 방법론 해설
    let logic = &result.logic_breakdown;
    html.push_str("<div class=\"appendix\"><h2>Appendix: Logic &amp; Methodology</h2>\n");
    push_logic_section(
        &mut html,
        "Unbundling Logic",
        &[
            ("Target Dimension", &logic.unbundling.dimension),
            ("Unbundling Steps", &logic.unbundling.steps),
            ("Discarded Elements", &logic.unbundling.discarded),
        ],
    );
    push_logic_section(
        &mut html,
        "Decoupling Logic",
        &[
            ("CVC Analysis", &logic.decoupling.cvc),
            ("Customer Pain Point", &logic.decoupling.pain_point),
            ("Discarded Elements", &logic.decoupling.discarded),
        ],
    );
    push_logic_section(
        &mut html,
        "Servitization Logic",
        &[
            ("Core Product Definition", &logic.servitization.product),
            ("Current State", &logic.servitization.state),
            ("Future Transformation", &logic.servitization.transformation),
        ],
    );
    html.push_str("</div>\n");

    // 인쇄 전용 푸터
    html.push_str(
        "<p class=\"print-footer\">This report was generated using the Strategic \
         Analysis Matrix Framework. Confidential.</p>\n",
    );

    html.push_str("</div>\n");
    html
}

/// 페르소나 셀 1개 렌더링 (아이디어 이름 + 설명)
fn push_idea_cell(html: &mut String, idea: &Idea) {
    let _ = write!(
        html,
        "<td class=\"idea\"><h4>{}</h4><p>{}</p></td>",
        escape_html(&idea.name),
        escape_html(&idea.description)
    );
}

/// 부록 섹션 1개 렌더링
fn push_logic_section(html: &mut String, title: &str, entries: &[(&str, &str)]) {
    let _ = write!(html, "<section class=\"logic\"><h3>{}</h3>", title);
    for (label, value) in entries {
        let _ = write!(
            html,
            "<p class=\"logic-label\">{}</p><p class=\"logic-value\">{}</p>",
            label,
            escape_html(value)
        );
    }
    html.push_str("</section>\n");
}

/// HTML 특수문자 이스케이프
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::dto::fixtures::sample_result;

    #[test]
    fn should_render_three_rows_with_three_persona_cells() {
        // Arrange
        let result = sample_result();

        // Act
        let html = render_report(&result, "1인창업가 카페운영 구독모델");

        // Assert
        assert_eq!(html.matches("class=\"matrix-row\"").count(), 3);
        assert_eq!(html.matches("class=\"idea\"").count(), 9);
        assert!(html.contains("원두 정기배송"));
        assert!(html.contains("해체형 혁신"));
    }

    #[test]
    fn should_render_three_appendix_sections() {
        // Arrange
        let result = sample_result();

        // Act
        let html = render_report(&result, "카페");

        // Assert
        assert_eq!(html.matches("class=\"logic\"").count(), 3);
        assert!(html.contains("Unbundling Logic"));
        assert!(html.contains("Customer Pain Point"));
        assert!(html.contains("Future Transformation"));
    }

    #[test]
    fn should_escape_model_generated_text() {
        // Arrange
        let mut result = sample_result();
        result.matrix[0].survival.name = "<script>alert(1)</script>".to_string();

        // Act
        let html = render_report(&result, "a & b");

        // Assert
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn rendering_should_be_deterministic() {
        // Arrange
        let result = sample_result();

        // Act & Assert
        assert_eq!(render_report(&result, "카페"), render_report(&result, "카페"));
    }
}
