//! 매트릭스 분석 서비스
//!
//! 입력 문구 1건으로 모델을 1회 호출하고, 응답 텍스트를 `AnalysisResult`로
//! 파싱합니다. 파싱 실패나 빈 응답은 부분 결과 없이 하드 실패입니다.

use super::client::GenerationClient;
use super::dto::AnalysisResult;
use super::prompt;
use crate::error::AppError;

pub struct AnalysisService {
    client: GenerationClient,
}

impl AnalysisService {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// 분야 문구를 분석하여 3x3 매트릭스 결과 생성
    pub async fn analyze(&self, field: &str) -> Result<AnalysisResult, AppError> {
        let field = field.trim();
        if field.is_empty() {
            return Err(AppError::Validation("분석할 분야는 필수입니다".to_string()));
        }

        let raw = self
            .client
            .generate(prompt::SYSTEM_INSTRUCTION, &prompt::user_prompt(field))
            .await?;

        let result: AnalysisResult = serde_json::from_str(raw.trim())
            .map_err(|e| AppError::MalformedCompletion(e.to_string()))?;

        tracing::info!(
            matrix_rows = result.matrix.len(),
            "분석 결과 파싱 완료"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::client::MockGenerationClientTrait;
    use super::super::dto::fixtures::sample_result_json;
    use super::*;

    fn service_with_response(raw: String) -> AnalysisService {
        let mut mock = MockGenerationClientTrait::new();
        mock.expect_generate()
            .returning(move |_, _| Ok(raw.clone()));
        AnalysisService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn should_parse_schema_conformant_completion() {
        // Arrange
        let service = service_with_response(sample_result_json().to_string());

        // Act
        let result = service.analyze("1인창업가 카페운영 구독모델").await.unwrap();

        // Assert
        assert_eq!(result.matrix.len(), 3);
        assert_eq!(result.logic_breakdown.servitization.product, "에스프레소 머신");
    }

    #[tokio::test]
    async fn should_trim_field_before_prompting() {
        // Arrange
        let mut mock = MockGenerationClientTrait::new();
        mock.expect_generate()
            .withf(|_, user| user == "분석할 분야: \"카페 구독\"")
            .returning(|_, _| Ok(sample_result_json().to_string()));
        let service = AnalysisService::new(Arc::new(mock));

        // Act
        let result = service.analyze("  카페 구독  ").await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn blank_field_should_fail_without_calling_model() {
        // Arrange: generate 호출 기대 없음 (호출되면 mockall이 패닉)
        let mock = MockGenerationClientTrait::new();
        let service = AnalysisService::new(Arc::new(mock));

        // Act
        let result = service.analyze("   ").await;

        // Assert
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn malformed_completion_should_be_hard_failure() {
        // Arrange
        let service = service_with_response("전략은 다음과 같습니다...".to_string());

        // Act
        let result = service.analyze("카페").await;

        // Assert
        assert!(matches!(result, Err(AppError::MalformedCompletion(_))));
    }

    #[tokio::test]
    async fn missing_required_field_should_be_hard_failure() {
        // Arrange: logicBreakdown 누락
        let service = service_with_response(r#"{"matrix": []}"#.to_string());

        // Act
        let result = service.analyze("카페").await;

        // Assert
        assert!(matches!(result, Err(AppError::MalformedCompletion(_))));
    }

    #[tokio::test]
    async fn client_failure_should_propagate() {
        // Arrange
        let mut mock = MockGenerationClientTrait::new();
        mock.expect_generate()
            .returning(|_, _| Err(AppError::GenerationFailed("quota".to_string())));
        let service = AnalysisService::new(Arc::new(mock));

        // Act
        let result = service.analyze("카페").await;

        // Assert
        assert!(matches!(result, Err(AppError::GenerationFailed(_))));
    }
}
