use axum::{
    extract::Path,
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};
use color_eyre::eyre::WrapErr;

use super::{errors::ServerError, pages, ResponseResult, STATIC_ASSETS};
use crate::AppState;

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route("/_", get(pages::admin::versions))
        .route("/static/{*path}", get(static_assets))
        .route("/", get(pages::home::home_page))
        .route(
            "/category/{category_id}/",
            get(pages::category::category_page),
        )
        .route("/category/{category_id}", get(append_slash))
        .route("/recipe/{recipe_id}/", get(pages::recipe::recipe_page))
        .route("/recipe/{recipe_id}", get(append_slash))
        .fallback(fallback)
}

async fn append_slash(uri: Uri) -> impl IntoResponse {
    Redirect::permanent(&format!("{}/", uri.path()))
}

async fn fallback(uri: Uri) -> ServerError {
    ServerError::not_found(format!("Page {}", uri.path()))
}

async fn static_assets(Path(p): Path<String>) -> ResponseResult {
    let path = p.strip_prefix('/').unwrap_or(&p);
    let path = path.strip_suffix('/').unwrap_or(path);

    let Some(entry) = STATIC_ASSETS.get_file(path) else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Static asset {path} not found"),
        )
            .into_response());
    };

    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(mime.as_ref()).wrap_err("Invalid mime type for static asset")?,
    );

    Ok((headers, entry.contents()).into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use db::test_utils::create_test_db;

    use crate::http_server::test_helpers::{create_test_app, get};

    #[tokio::test]
    async fn test_serves_embedded_stylesheet() {
        let app = create_test_app(create_test_db().await);

        let (status, headers, body) = get(app, "/static/styles.css").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-type"], "text/css");
        assert!(body.contains(".recipe"));
    }

    #[tokio::test]
    async fn test_missing_static_asset_is_404() {
        let app = create_test_app(create_test_db().await);

        let (status, _, _) = get(app, "/static/nope.js").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = create_test_app(create_test_db().await);

        let (status, _, body) = get(app, "/does/not/exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("not found"));
    }

    #[tokio::test]
    async fn test_missing_trailing_slash_redirects() {
        let app = create_test_app(create_test_db().await);

        let (status, headers, _) = get(app, "/recipe/12").await;

        assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
        assert_eq!(headers["location"], "/recipe/12/");
    }

    #[tokio::test]
    async fn test_versions_page_reports_database_health() {
        let app = create_test_app(create_test_db().await);

        let (status, _, body) = get(app, "/_").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(env!("CARGO_PKG_VERSION")));
        assert!(body.contains("Database: ok"));
    }
}
