pub mod db;
pub mod handlers;
pub mod import;
pub mod models;
pub mod names;
pub mod rejections;

use std::time::Instant;

use axum::{extract::DefaultBodyLimit, middleware, Router};

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub answer_policy: import::AnswerPolicy,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(db: db::Db) -> Self {
        Self {
            db,
            answer_policy: import::AnswerPolicy::default(),
            max_upload_bytes: names::DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::questions::routes())
        .fallback(rejections::not_found)
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request handled"
    );
    response
}
