use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use super::dto::ExportRequest;
use super::export;
use crate::error::AppError;
use crate::response::ErrorResponse;

/// TXT 리포트 내보내기
///
/// 분석 결과를 평문 리포트로 직렬화하여 첨부파일로 응답합니다.
#[utoipa::path(
    post,
    path = "/api/report/txt",
    tag = "Report",
    request_body = ExportRequest,
    responses(
        (status = 200, description = "내보내기 성공", content_type = "text/plain"),
        (status = 400, description = "잘못된 요청", body = ErrorResponse)
    )
)]
pub async fn export_txt(
    request: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    // JSON 파싱 에러 처리
    let Json(request) = request.map_err(AppError::from)?;

    // 입력 검증
    request.validate()?;

    let field = request.field.trim();
    if field.is_empty() {
        return Err(AppError::Validation("분야 문구는 필수입니다".to_string()));
    }
    let body = export::to_plain_text(&request.analysis, field);

    tracing::info!(
        field_length = field.len(),
        bytes = body.len(),
        "TXT export generated"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, export::content_disposition(field)),
        ],
        body,
    )
        .into_response())
}
