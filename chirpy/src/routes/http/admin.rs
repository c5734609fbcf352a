use std::sync::atomic::Ordering;

use axum::{
    extract::{Request, State},
    http::header::CONTENT_TYPE,
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

use crate::app_state::{AppState, HitCounterType};

/// Counts every request that reaches the static file server.
pub async fn track_fileserver_hits(
    State(hits): State<HitCounterType>,
    request: Request,
    next: Next,
) -> Response {
    hits.fetch_add(1, Ordering::Relaxed);
    next.run(request).await
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let hits = state.fileserver_hits.load(Ordering::Relaxed);
    Html(format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {hits} times!</p>\n  </body>\n</html>"
    ))
}

pub async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    state.fileserver_hits.store(0, Ordering::Relaxed);
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], "OK")
}
