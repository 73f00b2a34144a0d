//! 요청 추적 미들웨어
//!
//! 요청마다 고유 request id를 부여하고, 페이지가 보내는 세션 식별자
//! (`x-session-id`)가 있으면 같은 span에 함께 기록합니다.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// 분산 추적용 request id 헤더 이름
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 브라우저 탭 세션 식별자 헤더 이름 (분석 이벤트 상관관계용)
pub const SESSION_ID_HEADER: &str = "x-session-id";

/// 요청 단위 tracing span + 요청 수/응답 시간 메트릭 기록
pub async fn request_tracing(request: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let session_id = request
        .headers()
        .get(SESSION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        path = %path,
        session_id = %session_id,
    );

    async move {
        tracing::info!("Request started");
        let start = Instant::now();

        let response = next.run(request).await;

        let duration = start.elapsed();
        let status = response.status();

        tracing::info!(
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request completed"
        );

        record_request_metrics(method.as_ref(), &path, status.as_u16(), duration);

        response
    }
    .instrument(span)
    .await
}

/// HTTP 요청 메트릭 기록
fn record_request_metrics(method: &str, path: &str, status: u16, duration: std::time::Duration) {
    let status_str = status.to_string();

    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "path" => normalize_path(path),
        "status" => status_str.clone()
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => normalize_path(path),
        "status" => status_str
    )
    .record(duration.as_secs_f64());
}

/// 메트릭 카디널리티 제한을 위한 경로 정규화
fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() <= 2 {
        path.to_string()
    } else {
        format!("/{}/{}", segments[0], segments[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_short() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/health"), "/health");
        assert_eq!(normalize_path("/api/analytics"), "/api/analytics");
    }

    #[test]
    fn test_normalize_path_long() {
        assert_eq!(normalize_path("/api/analysis/matrix"), "/api/analysis");
        assert_eq!(normalize_path("/api/analytics/track"), "/api/analytics");
        assert_eq!(normalize_path("/api/report/txt"), "/api/report");
    }
}
