//! 액션 로그 DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 기록 가능한 액션 종류 (7종 고정)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    PageVisit,
    SearchExecution,
    ResultView,
    PdfExport,
    TxtExport,
    InputFocus,
    InputClear,
}

/// 액션 기록 요청 DTO
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    /// 액션 종류
    #[schema(example = "search_execution")]
    pub action_type: ActionType,

    /// 액션 시점의 입력 필드 값 (선택)
    #[serde(default)]
    pub field_value: Option<String>,

    /// 탭 세션 식별자 (미제공 시 서버가 발급)
    #[serde(default)]
    pub session_id: Option<String>,
}

/// 원격 저장소에 적재되는 로그 행
#[derive(Debug, Clone, Serialize)]
pub struct ActionLogRow {
    pub session_id: String,
    pub action_type: ActionType,
    pub field_value: Option<String>,
}

/// 액션 기록 접수 응답
#[derive(Debug, Serialize, ToSchema)]
pub struct TrackResponse {
    /// 접수 여부 (적재 완료를 의미하지 않음)
    #[schema(example = true)]
    pub accepted: bool,
}
