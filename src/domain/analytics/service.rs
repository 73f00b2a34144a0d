//! 액션 로그 서비스
//!
//! 기록은 best-effort입니다. 적재 태스크를 분리 실행(detach)하고 완료를
//! 기다리지 않으며, 어떤 실패도 호출자나 사용자 흐름에 전파하지 않습니다.

use std::sync::Arc;

use super::dto::{ActionLogRow, ActionType};
use super::session::SessionProvider;

/// 액션 로그 테이블 이름
const ACTION_LOG_TABLE: &str = "action_logs";

/// 원격 로그 저장소 접속 정보
#[derive(Clone)]
struct AnalyticsEndpoint {
    insert_url: String,
    api_key: String,
}

pub struct AnalyticsService {
    http: reqwest::Client,
    endpoint: Option<AnalyticsEndpoint>,
    sessions: Arc<dyn SessionProvider>,
}

impl AnalyticsService {
    /// 서비스 생성. `base_url`/`api_key`가 없으면 기록이 비활성화됩니다.
    pub fn new(
        http: reqwest::Client,
        base_url: Option<String>,
        api_key: Option<String>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        let endpoint = match (base_url, api_key) {
            (Some(url), Some(key)) => Some(AnalyticsEndpoint {
                insert_url: format!("{}/rest/v1/{}", url.trim_end_matches('/'), ACTION_LOG_TABLE),
                api_key: key,
            }),
            _ => None,
        };

        Self {
            http,
            endpoint,
            sessions,
        }
    }

    /// 기록 비활성화 상태의 서비스 (테스트용)
    pub fn disabled(sessions: Arc<dyn SessionProvider>) -> Self {
        Self::new(reqwest::Client::new(), None, None, sessions)
    }

    /// 세션 식별자 결정: 제공된 값이 있으면 사용, 없으면 새로 발급
    pub fn resolve_session_id(&self, supplied: Option<&str>) -> String {
        match supplied.map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.sessions.mint(),
        }
    }

    /// 액션 1건 기록 (fire-and-forget)
    ///
    /// 즉시 반환하며, 적재 실패는 warn 로그로만 남깁니다.
    pub fn track(
        &self,
        action_type: ActionType,
        field_value: Option<String>,
        session_id: Option<&str>,
    ) -> String {
        let row = ActionLogRow {
            session_id: self.resolve_session_id(session_id),
            action_type,
            field_value,
        };
        let session_id = row.session_id.clone();

        let Some(endpoint) = self.endpoint.clone() else {
            tracing::debug!(action = ?action_type, "액션 로그 비활성화 상태, 기록 생략");
            return session_id;
        };

        let http = self.http.clone();
        tokio::spawn(async move {
            if let Err(e) = send_row(&http, &endpoint, &row).await {
                tracing::warn!(error = %e, action = ?row.action_type, "액션 로그 기록 실패");
            }
        });

        session_id
    }
}

/// 로그 행 1건을 원격 테이블에 적재
async fn send_row(
    http: &reqwest::Client,
    endpoint: &AnalyticsEndpoint,
    row: &ActionLogRow,
) -> Result<(), reqwest::Error> {
    http.post(&endpoint.insert_url)
        .header("apikey", &endpoint.api_key)
        .header("Authorization", format!("Bearer {}", endpoint.api_key))
        .header("Prefer", "return=minimal")
        .json(row)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::session::FixedSessionProvider;
    use super::*;

    fn disabled_service() -> AnalyticsService {
        AnalyticsService::disabled(Arc::new(FixedSessionProvider(
            "session_0_fixed".to_string(),
        )))
    }

    #[test]
    fn should_keep_supplied_session_id() {
        // Arrange
        let service = disabled_service();

        // Act
        let resolved = service.resolve_session_id(Some("session_9_tab"));

        // Assert
        assert_eq!(resolved, "session_9_tab");
    }

    #[test]
    fn should_mint_session_id_when_missing_or_blank() {
        // Arrange
        let service = disabled_service();

        // Act & Assert
        assert_eq!(service.resolve_session_id(None), "session_0_fixed");
        assert_eq!(service.resolve_session_id(Some("   ")), "session_0_fixed");
    }

    #[tokio::test]
    async fn track_should_return_immediately_when_disabled() {
        // Arrange
        let service = disabled_service();

        // Act: 네트워크 없이도 에러 없이 즉시 반환되어야 함
        let session_id = service.track(ActionType::PageVisit, None, None);

        // Assert
        assert_eq!(session_id, "session_0_fixed");
    }

    #[tokio::test]
    async fn track_should_swallow_unreachable_endpoint() {
        // Arrange: 연결 불가능한 주소로도 호출 흐름은 실패하지 않아야 함
        let service = AnalyticsService::new(
            reqwest::Client::new(),
            Some("http://127.0.0.1:1".to_string()),
            Some("anon-key".to_string()),
            Arc::new(FixedSessionProvider("session_0_fixed".to_string())),
        );

        // Act
        let session_id = service.track(
            ActionType::SearchExecution,
            Some("카페".to_string()),
            Some("session_9_tab"),
        );

        // Assert: 실패는 내부에서 삼켜지고 호출자는 영향을 받지 않음
        assert_eq!(session_id, "session_9_tab");
    }

    #[test]
    fn endpoint_should_target_action_logs_table() {
        // Arrange
        let service = AnalyticsService::new(
            reqwest::Client::new(),
            Some("https://example.supabase.co/".to_string()),
            Some("anon-key".to_string()),
            Arc::new(FixedSessionProvider("s".to_string())),
        );

        // Assert
        assert_eq!(
            service.endpoint.as_ref().unwrap().insert_url,
            "https://example.supabase.co/rest/v1/action_logs"
        );
    }
}
