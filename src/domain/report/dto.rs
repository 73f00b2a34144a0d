use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::analysis::dto::AnalysisResult;

/// TXT 내보내기 요청 DTO
///
/// 서버는 리포트를 보관하지 않으므로, 내보낼 결과는 요청에 함께 담아 보냅니다.
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct ExportRequest {
    /// 분석에 사용된 분야 문구 (파일명 유래)
    #[validate(length(min = 1, max = 200, message = "분야 문구는 필수입니다"))]
    #[schema(example = "1인창업가 카페운영 구독모델")]
    pub field: String,

    /// 내보낼 분석 결과
    pub analysis: AnalysisResult,
}
