//! 생성 모델 클라이언트
//!
//! 호출은 분석당 정확히 1회이며 재시도/캐싱/스트리밍을 하지 않습니다.

use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
        ResponseFormatJsonSchema,
    },
    Client,
};

use super::prompt;
use crate::error::AppError;

/// OpenAI 에러를 도메인 에러로 변환
///
/// 세부 분류는 로그 품질을 위한 것으로, 사용자 노출 메시지는 모두 동일합니다.
fn classify_openai_error(error: OpenAIError) -> AppError {
    match &error {
        OpenAIError::ApiError(api_err) => {
            let err_type = api_err.r#type.as_deref().unwrap_or("");
            AppError::GenerationFailed(format!("{}: {}", err_type, api_err.message))
        }
        OpenAIError::Reqwest(req_err) => {
            if req_err.is_timeout() || req_err.is_connect() {
                AppError::GenerationFailed(format!("transport: {}", req_err))
            } else {
                AppError::GenerationFailed(req_err.to_string())
            }
        }
        _ => AppError::GenerationFailed(error.to_string()),
    }
}

/// 생성 클라이언트 인터페이스
///
/// 모델 API 호출을 추상화하여 테스트에서 Mock 객체로 대체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GenerationClientTrait: Send + Sync {
    /// 시스템 인스트럭션 + 사용자 프롬프트로 구조화 출력 1회 생성
    ///
    /// 반환값은 응답 스키마를 만족해야 하는 JSON 텍스트입니다.
    async fn generate(&self, system: &str, user: &str) -> Result<String, AppError>;
}

/// Arc로 래핑된 GenerationClient (Clone 지원)
pub type GenerationClient = Arc<dyn GenerationClientTrait>;

/// OpenAI API 클라이언트 구현체
#[derive(Clone)]
pub struct OpenAiGenerationClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerationClient {
    pub fn new(api_key: &str, model: &str) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
            model: model.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl GenerationClientTrait for OpenAiGenerationClient {
    async fn generate(&self, system: &str, user: &str) -> Result<String, AppError> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()
                .map_err(|e| AppError::Internal(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user)
                .build()
                .map_err(|e| AppError::Internal(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .response_format(ResponseFormat::JsonSchema {
                json_schema: ResponseFormatJsonSchema {
                    name: "analysis_result".to_string(),
                    description: Some("비즈니스 기회 발견 매트릭스 분석 결과".to_string()),
                    schema: Some(prompt::response_schema()),
                    strict: Some(true),
                },
            })
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(classify_openai_error)?;

        let text = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::EmptyCompletion);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_client_with_model() {
        let client = OpenAiGenerationClient::new("test-api-key", "gpt-4o-mini");

        assert_eq!(client.model, "gpt-4o-mini");
    }

    #[test]
    fn api_error_should_become_generation_failed() {
        let error = classify_openai_error(OpenAIError::StreamError("boom".to_string()));

        assert!(matches!(error, AppError::GenerationFailed(_)));
        assert_eq!(error.error_code(), "AI_002");
    }
}
