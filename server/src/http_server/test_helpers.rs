use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use sqlx::SqlitePool;
use tower::ServiceExt;

use crate::{http_server::routes, state::VersionInfo, AppConfig, AppState};

pub fn create_test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        app: AppConfig::from_base_url("http://localhost:3000").unwrap(),
        versions: VersionInfo::from_build(),
        db: pool,
    };

    routes::make_router().with_state(state)
}

/// Issues a GET and returns the status, headers and body as text.
pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, headers, String::from_utf8(body_bytes.to_vec()).unwrap())
}
