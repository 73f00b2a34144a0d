use axum::response::Html;

use super::template;

/// 애플리케이션 셸 페이지 제공
pub async fn index() -> Html<String> {
    Html(template::render_index())
}
