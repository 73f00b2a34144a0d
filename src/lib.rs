pub mod config;
pub mod domain;
pub mod error;
pub mod global;
pub mod response;
pub mod shutdown;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::AppConfig;
use domain::analysis::client::GenerationClient;
use domain::analysis::service::AnalysisService;
use domain::analytics::service::AnalyticsService;
use domain::analytics::session::{RandomSessionProvider, SessionProvider};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::analysis::handler::analyze_matrix,
        domain::analytics::handler::track_action,
        domain::report::handler::export_txt,
    ),
    components(
        schemas(
            domain::analysis::dto::AnalyzeRequest,
            domain::analysis::dto::AnalyzeResponse,
            domain::analysis::dto::AnalysisResult,
            domain::analysis::dto::MatrixRow,
            domain::analysis::dto::Strategy,
            domain::analysis::dto::Idea,
            domain::analysis::dto::LogicBreakdown,
            domain::analytics::dto::TrackRequest,
            domain::analytics::dto::ActionType,
            domain::analytics::dto::TrackResponse,
            domain::report::dto::ExportRequest,
            response::BaseResponse<domain::analysis::dto::AnalyzeResponse>,
            response::BaseResponse<domain::analytics::dto::TrackResponse>,
            response::ErrorResponse,
        )
    ),
    tags(
        (name = "Analysis", description = "비즈니스 기회 매트릭스 분석 API"),
        (name = "Analytics", description = "액션 로그 API"),
        (name = "Report", description = "리포트 내보내기 API")
    )
)]
pub struct ApiDoc;

/// 운영 상태 구성: 설정으로부터 실제 클라이언트들을 생성
pub fn build_state(config: AppConfig) -> AppState {
    let client: GenerationClient = Arc::new(
        domain::analysis::client::OpenAiGenerationClient::new(
            &config.openai_api_key,
            &config.openai_model,
        ),
    );
    let sessions: Arc<dyn SessionProvider> = Arc::new(RandomSessionProvider);
    let analytics = AnalyticsService::new(
        reqwest::Client::new(),
        config.analytics_url.clone(),
        config.analytics_api_key.clone(),
        sessions,
    );

    AppState {
        config,
        analysis: Arc::new(AnalysisService::new(client)),
        analytics: Arc::new(analytics),
    }
}

/// 라우터 구성
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(domain::page::handler::index))
        .route("/health", get(|| async { "OK" }))
        .route(
            "/api/analysis/matrix",
            post(domain::analysis::handler::analyze_matrix),
        )
        .route(
            "/api/analytics/track",
            post(domain::analytics::handler::track_action),
        )
        .route("/api/report/txt", post(domain::report::handler::export_txt))
        .layer(axum::middleware::from_fn(global::middleware::request_tracing))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 통합 테스트용 라우터: 생성 클라이언트와 세션 제공자를 주입
pub fn create_test_router(
    client: GenerationClient,
    sessions: Arc<dyn SessionProvider>,
) -> Router {
    let config = AppConfig {
        server_port: 0,
        openai_api_key: "test-key".to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        analytics_url: None,
        analytics_api_key: None,
    };

    let state = AppState {
        config,
        analysis: Arc::new(AnalysisService::new(client)),
        analytics: Arc::new(AnalyticsService::disabled(sessions)),
    };

    app(state)
}
