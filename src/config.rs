use std::env;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,

    // AI Service
    pub openai_api_key: String,
    pub openai_model: String,

    // 액션 로그 저장소 (Supabase REST). 미설정 시 로그 기록이 비활성화됩니다.
    pub analytics_url: Option<String>,
    pub analytics_api_key: Option<String>,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_else(|_| {
            tracing::warn!(
                "OPENAI_API_KEY 환경변수가 설정되지 않았습니다. 프로덕션 환경에서는 반드시 설정하세요."
            );
            "test-key".to_string()
        });

        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let analytics_url = env::var("ANALYTICS_URL").ok().filter(|v| !v.is_empty());
        let analytics_api_key = env::var("ANALYTICS_API_KEY").ok().filter(|v| !v.is_empty());

        if analytics_url.is_none() {
            tracing::warn!("ANALYTICS_URL 미설정: 액션 로그 기록이 비활성화됩니다.");
        }

        Ok(Self {
            server_port,
            openai_api_key,
            openai_model,
            analytics_url,
            analytics_api_key,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
}
