use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use super::dto::{TrackRequest, TrackResponse};
use crate::error::AppError;
use crate::response::{BaseResponse, ErrorResponse};
use crate::state::AppState;

/// 액션 로그 기록
///
/// 이벤트 1건을 접수하고 즉시 202를 반환합니다. 실제 적재는 백그라운드에서
/// 진행되며 실패해도 사용자 흐름에 영향을 주지 않습니다.
#[utoipa::path(
    post,
    path = "/api/analytics/track",
    tag = "Analytics",
    request_body = TrackRequest,
    responses(
        (status = 202, description = "접수 완료", body = BaseResponse<TrackResponse>),
        (status = 400, description = "잘못된 요청", body = ErrorResponse)
    )
)]
pub async fn track_action(
    State(state): State<AppState>,
    request: Result<Json<TrackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BaseResponse<TrackResponse>>), AppError> {
    // JSON 파싱 에러 처리
    let Json(request) = request.map_err(AppError::from)?;

    state.analytics.track(
        request.action_type,
        request.field_value,
        request.session_id.as_deref(),
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(BaseResponse::success(TrackResponse { accepted: true })),
    ))
}
