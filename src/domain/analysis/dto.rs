//! 분석 요청/응답 DTO
//!
//! 모델이 반환하는 JSON은 `AnalysisResult` 구조를 정확히 만족해야 하며,
//! 필수 필드 누락이나 허용되지 않은 전략 태그는 역직렬화 단계에서 거부됩니다.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 혁신 전략 Enum
///
/// 모델 응답의 `strategy` 필드는 이 세 가지 리터럴만 허용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum Strategy {
    /// 해체형 혁신
    Unbundling,
    /// 단계형 혁신
    Decoupling,
    /// 서비스형 혁신
    Servitization,
}

impl Strategy {
    /// 영문 태그 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Unbundling => "Unbundling",
            Strategy::Decoupling => "Decoupling",
            Strategy::Servitization => "Servitization",
        }
    }

    /// 리포트에 표기되는 한글 전략명
    pub fn korean_label(&self) -> &'static str {
        match self {
            Strategy::Unbundling => "해체형 혁신",
            Strategy::Decoupling => "단계형 혁신",
            Strategy::Servitization => "서비스형 혁신",
        }
    }
}

/// 비즈니스 모델 아이디어 한 건 (이름 + 한 문단 설명)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct Idea {
    pub name: String,
    pub description: String,
}

/// 매트릭스 한 행: 하나의 전략을 세 페르소나에 적용한 결과
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct MatrixRow {
    pub strategy: Strategy,
    /// 생존형
    pub survival: Idea,
    /// 창업가형
    pub entrepreneur: Idea,
    /// 전문가형
    pub expert: Idea,
}

/// Unbundling 전략의 도출 근거
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UnbundlingLogic {
    pub dimension: String,
    pub steps: String,
    pub discarded: String,
}

/// Decoupling 전략의 도출 근거
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecouplingLogic {
    pub cvc: String,
    pub pain_point: String,
    pub discarded: String,
}

/// Servitization 전략의 도출 근거
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ServitizationLogic {
    pub product: String,
    pub state: String,
    pub transformation: String,
}

/// 전략별 방법론 해설 (리포트 부록)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct LogicBreakdown {
    pub unbundling: UnbundlingLogic,
    pub decoupling: DecouplingLogic,
    pub servitization: ServitizationLogic,
}

/// 분석 1회 호출의 전체 결과
///
/// 생성 후 변경되지 않으며, 다음 분석 시 통째로 교체됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub matrix: Vec<MatrixRow>,
    pub logic_breakdown: LogicBreakdown,
}

/// 매트릭스 분석 요청 DTO
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct AnalyzeRequest {
    /// 분석할 비즈니스 분야 (1 ~ 200자)
    #[validate(length(
        min = 1,
        max = 200,
        message = "분석할 분야는 1자 이상 200자 이하여야 합니다"
    ))]
    #[schema(example = "1인창업가 카페운영 구독모델")]
    pub field: String,
}

/// 매트릭스 분석 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// 실제 분석에 사용된 (trim 된) 분야 문구
    #[schema(example = "1인창업가 카페운영 구독모델")]
    pub analyzed_field: String,

    /// 파싱된 분석 결과
    pub analysis: AnalysisResult,

    /// 서버에서 렌더링한 리포트 HTML 조각
    pub report_html: String,
}

/// 테스트 공용 픽스처 (모듈 단위 테스트와 통합 테스트 스타일을 맞추기 위한 샘플 응답)
#[cfg(test)]
pub(crate) mod fixtures {
    use super::AnalysisResult;

    pub(crate) fn sample_result() -> AnalysisResult {
        serde_json::from_value(sample_result_json()).unwrap()
    }

    pub(crate) fn sample_result_json() -> serde_json::Value {
        serde_json::json!({
            "matrix": [
                {
                    "strategy": "Unbundling",
                    "survival": {"name": "원두 정기배송", "description": "매장 없이 원두만 판매합니다."},
                    "entrepreneur": {"name": "무인 픽업 바", "description": "픽업 전용 초소형 매장을 운영합니다."},
                    "expert": {"name": "로스팅 클래스", "description": "로스팅 노하우를 강의로 판매합니다."}
                },
                {
                    "strategy": "Decoupling",
                    "survival": {"name": "주문 선결제 앱", "description": "대기 없는 선주문 경험만 분리합니다."},
                    "entrepreneur": {"name": "구독 멤버십", "description": "월정액으로 음료를 제공합니다."},
                    "expert": {"name": "QC 컨설팅", "description": "품질 관리 단계만 대행합니다."}
                },
                {
                    "strategy": "Servitization",
                    "survival": {"name": "머신 렌탈", "description": "장비를 구독형으로 빌려줍니다."},
                    "entrepreneur": {"name": "카페 운영 대행", "description": "운영 전체를 서비스로 제공합니다."},
                    "expert": {"name": "메뉴 R&D 구독", "description": "신메뉴 개발을 구독 상품화합니다."}
                }
            ],
            "logicBreakdown": {
                "unbundling": {
                    "dimension": "상품 축",
                    "steps": "가치사슬을 원두-추출-공간으로 분해",
                    "discarded": "매장 공간 요소 제거"
                },
                "decoupling": {
                    "cvc": "탐색-주문-수령-소비",
                    "painPoint": "대기 시간",
                    "discarded": "현장 주문 단계"
                },
                "servitization": {
                    "product": "에스프레소 머신",
                    "state": "소유 중심 판매",
                    "transformation": "사용량 기반 구독 전환"
                }
            }
        })
    }
}
