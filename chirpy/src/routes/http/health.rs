use axum::{http::header::CONTENT_TYPE, response::IntoResponse};

pub async fn healthz() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], "OK")
}
