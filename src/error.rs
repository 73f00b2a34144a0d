//! 애플리케이션 전역 에러 타입
//!
//! 모든 생성 실패(네트워크, 인증, 빈 응답, 스키마 불일치)는 사용자에게
//! 하나의 고정 메시지(`AI_002`)로 수렴하고, 세부 원인은 로그로만 남깁니다.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::response::ErrorResponse;

/// 생성 실패 시 사용자에게 노출되는 고정 메시지
pub const GENERATION_ERROR_MESSAGE: &str =
    "분석 과정에서 오류가 발생했습니다. 나중에 다시 시도해 주세요.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 입력값 검증 실패
    #[error("잘못된 요청입니다: {0}")]
    Validation(String),

    /// 요청 본문 JSON 파싱 실패
    #[error("잘못된 요청 형식입니다: {0}")]
    JsonParseFailed(String),

    /// 모델 호출 실패 (네트워크, 인증, 쿼터 등)
    #[error("모델 호출에 실패했습니다: {0}")]
    GenerationFailed(String),

    /// 모델이 빈 응답을 반환
    #[error("모델 응답이 비어 있습니다")]
    EmptyCompletion,

    /// 모델 응답이 유효한 JSON이 아니거나 스키마를 만족하지 않음
    #[error("모델 응답을 해석할 수 없습니다: {0}")]
    MalformedCompletion(String),

    /// 서버 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

impl AppError {
    /// 에러 코드 반환
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::JsonParseFailed(_) => "COMMON400",
            AppError::GenerationFailed(_)
            | AppError::EmptyCompletion
            | AppError::MalformedCompletion(_) => "AI_002",
            AppError::Internal(_) => "COMMON500",
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::GenerationFailed(_)
            | AppError::EmptyCompletion
            | AppError::MalformedCompletion(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 사용자에게 노출되는 메시지 반환
    ///
    /// 생성 계열 에러는 세부 원인과 무관하게 동일한 고정 메시지를 사용합니다.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => format!("잘못된 요청입니다: {}", msg),
            AppError::JsonParseFailed(_) => "잘못된 요청 형식입니다.".to_string(),
            AppError::GenerationFailed(_)
            | AppError::EmptyCompletion
            | AppError::MalformedCompletion(_) => GENERATION_ERROR_MESSAGE.to_string(),
            AppError::Internal(_) => "서버 에러, 관리자에게 문의 바랍니다.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.user_message();

        // 세부 원인은 진단 채널(로그)로만 남긴다
        match &self {
            AppError::GenerationFailed(_)
            | AppError::EmptyCompletion
            | AppError::MalformedCompletion(_)
            | AppError::Internal(_) => {
                tracing::error!(error = %self, code, "요청 처리 실패");
            }
            _ => {
                tracing::warn!(error = %self, code, "잘못된 요청");
            }
        }

        (status, Json(ErrorResponse::new(code, &message))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_errors_should_share_one_code() {
        let errors = [
            AppError::GenerationFailed("timeout".to_string()),
            AppError::EmptyCompletion,
            AppError::MalformedCompletion("expected value".to_string()),
        ];

        for error in errors {
            assert_eq!(error.error_code(), "AI_002");
            assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
            assert_eq!(error.user_message(), GENERATION_ERROR_MESSAGE);
        }
    }

    #[test]
    fn generation_errors_should_not_leak_detail_to_user() {
        let error = AppError::GenerationFailed("invalid_api_key: sk-xxxx".to_string());

        assert!(!error.user_message().contains("sk-xxxx"));
    }

    #[test]
    fn validation_error_should_map_to_common400() {
        let error = AppError::Validation("분석할 분야는 필수입니다".to_string());

        assert_eq!(error.error_code(), "COMMON400");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_should_map_to_common500() {
        let error = AppError::Internal("oops".to_string());

        assert_eq!(error.error_code(), "COMMON500");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
