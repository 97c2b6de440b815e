use crate::render;
use crate::services::content::PageView;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

pub fn posts_router() -> Router<AppState> {
    Router::new().route("/post/{slug}", get(get_post_handler))
}

async fn get_post_handler(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.content.get_page(&slug).await {
        PageView::Ready(html) => Html(html).into_response(),

        // the page is being generated on demand; the loading page refreshes
        // itself until the background fetch lands in the cache
        PageView::Pending => Html(render::loading_page().into_string()).into_response(),

        PageView::NotFound => StatusCode::NOT_FOUND.into_response(),
    }
}
