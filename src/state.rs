use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::analysis::service::AnalysisService;
use crate::domain::analytics::service::AnalyticsService;

/// 핸들러 간 공유되는 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub analysis: Arc<AnalysisService>,
    pub analytics: Arc<AnalyticsService>,
}
