use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use super::dto::{AnalyzeRequest, AnalyzeResponse};
use crate::domain::report::view;
use crate::error::AppError;
use crate::response::{BaseResponse, ErrorResponse};
use crate::state::AppState;

/// 비즈니스 기회 매트릭스 분석
///
/// 입력한 분야 문구로 생성 모델을 1회 호출하여 3x3 매트릭스 리포트를 생성합니다.
#[utoipa::path(
    post,
    path = "/api/analysis/matrix",
    tag = "Analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "분석 성공", body = BaseResponse<AnalyzeResponse>),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 502, description = "생성 실패", body = ErrorResponse)
    )
)]
pub async fn analyze_matrix(
    State(state): State<AppState>,
    request: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<AnalyzeResponse>>, AppError> {
    // JSON 파싱 에러 처리
    let Json(request) = request.map_err(AppError::from)?;

    tracing::info!(field_length = request.field.len(), "Analyze request received");

    // 입력 검증
    request.validate()?;

    let analyzed_field = request.field.trim().to_string();

    // 서비스 호출 (분석당 모델 호출 1회)
    let analysis = state.analysis.analyze(&analyzed_field).await?;

    // 리포트 HTML 렌더링
    let report_html = view::render_report(&analysis, &analyzed_field);

    tracing::info!(
        matrix_rows = analysis.matrix.len(),
        "Analysis completed successfully"
    );

    Ok(Json(BaseResponse::success(AnalyzeResponse {
        analyzed_field,
        analysis,
        report_html,
    })))
}
