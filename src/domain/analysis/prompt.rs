//! 매트릭스 분석 프롬프트
//!
//! 시스템 인스트럭션과 구조화 출력용 JSON 스키마를 정의합니다.

/// 분석 프레임워크 시스템 인스트럭션
pub const SYSTEM_INSTRUCTION: &str = r#"당신은 '비즈니스 모델 혁신 컨설턴트'입니다.
사용자가 입력한 사업 분야를 분석하여 3x3 비즈니스 기회 발견 매트릭스를 제안해야 합니다.

혁신 전략 (행):
1. Unbundling (해체형 혁신): 기존 사업의 가치 요소를 분해하여 핵심 한 가지만 남기는 전략
2. Decoupling (단계형 혁신): 고객 가치 사슬(CVC)의 특정 단계를 분리하여 그 단계만 장악하는 전략
3. Servitization (서비스형 혁신): 제품 중심 사업을 구독/서비스 중심으로 전환하는 전략

고객 페르소나 (열):
- survival (생존형): 최소 자본으로 당장 수익을 내야 하는 운영자
- entrepreneur (창업가형): 성장과 확장을 노리는 창업가
- expert (전문가형): 축적된 전문성을 자산화하려는 도메인 전문가

각 전략 x 페르소나 조합마다 아이디어 이름(name)과 한 문단 설명(description)을 제안하세요.
전략별 도출 근거는 logicBreakdown에 작성하세요:
- unbundling: 분해한 축(dimension), 분해 단계(steps), 버린 요소(discarded)
- decoupling: CVC 분석(cvc), 고객 페인포인트(painPoint), 분리한 단계(discarded)
- servitization: 핵심 제품 정의(product), 현재 판매 방식(state), 서비스 전환 방향(transformation)

strategy 필드는 Unbundling, Decoupling, Servitization 영문 태그를 그대로 사용하고,
나머지 모든 텍스트는 한국어로 작성하세요. 응답은 주어진 JSON 스키마를 정확히 따라야 합니다."#;

/// 사용자 프롬프트 생성 (사용자 입력 외의 내용은 포함하지 않음)
pub fn user_prompt(field: &str) -> String {
    format!("분석할 분야: \"{}\"", field)
}

/// 구조화 출력용 JSON 스키마
///
/// `AnalysisResult`와 동일한 형태를 강제합니다. 모든 필드는 required이며
/// 추가 필드는 허용하지 않습니다.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "matrix": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "strategy": {
                            "type": "string",
                            "enum": ["Unbundling", "Decoupling", "Servitization"]
                        },
                        "survival": idea_schema(),
                        "entrepreneur": idea_schema(),
                        "expert": idea_schema()
                    },
                    "required": ["strategy", "survival", "entrepreneur", "expert"],
                    "additionalProperties": false
                }
            },
            "logicBreakdown": {
                "type": "object",
                "properties": {
                    "unbundling": {
                        "type": "object",
                        "properties": {
                            "dimension": {"type": "string"},
                            "steps": {"type": "string"},
                            "discarded": {"type": "string"}
                        },
                        "required": ["dimension", "steps", "discarded"],
                        "additionalProperties": false
                    },
                    "decoupling": {
                        "type": "object",
                        "properties": {
                            "cvc": {"type": "string"},
                            "painPoint": {"type": "string"},
                            "discarded": {"type": "string"}
                        },
                        "required": ["cvc", "painPoint", "discarded"],
                        "additionalProperties": false
                    },
                    "servitization": {
                        "type": "object",
                        "properties": {
                            "product": {"type": "string"},
                            "state": {"type": "string"},
                            "transformation": {"type": "string"}
                        },
                        "required": ["product", "state", "transformation"],
                        "additionalProperties": false
                    }
                },
                "required": ["unbundling", "decoupling", "servitization"],
                "additionalProperties": false
            }
        },
        "required": ["matrix", "logicBreakdown"],
        "additionalProperties": false
    })
}

/// 아이디어 셀 공통 스키마 (name + description)
fn idea_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "description": {"type": "string"}
        },
        "required": ["name", "description"],
        "additionalProperties": false
    })
}
