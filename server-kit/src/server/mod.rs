use color_eyre::eyre::WrapErr;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub mod trace;

const DEFAULT_PORT: u16 = 3000;

/// Wraps the fully-stated router in the request tracing layer.
pub fn with_tracing(routes: axum::Router) -> axum::Router {
    let tracer = trace::Tracer;
    let trace_layer = tower_http::trace::TraceLayer::new_for_http()
        .make_span_with(tracer)
        .on_response(tracer);

    routes.layer(trace_layer)
}

pub fn listen_addr(port: Option<&str>) -> color_eyre::Result<SocketAddr> {
    let port = match port {
        Some(p) => p
            .parse()
            .wrap_err_with(|| format!("PORT must be a valid port number, got {p}"))?,
        None => DEFAULT_PORT,
    };

    Ok(SocketAddr::from(([0, 0, 0, 0], port)))
}

pub async fn run_server(routes: axum::Router) -> color_eyre::Result<()> {
    let app = with_tracing(routes);

    let port = std::env::var("PORT").ok();
    let addr = listen_addr(port.as_deref())?;

    tracing::info!("Starting server on port {}", addr.port());
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err("Failed to open port")?;

    let addr = listener.local_addr()?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .wrap_err("Failed to run server")
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    use super::*;

    #[test]
    fn listen_addr_defaults_to_3000() {
        let addr = listen_addr(None).unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn listen_addr_uses_given_port() {
        assert_eq!(listen_addr(Some("8080")).unwrap().port(), 8080);
    }

    #[test]
    fn listen_addr_rejects_garbage() {
        let err = listen_addr(Some("not-a-port")).unwrap_err();
        assert!(err.to_string().contains("not-a-port"));
    }

    #[tokio::test]
    async fn tracing_layer_passes_responses_through() {
        let app = with_tracing(Router::new().route("/ping", get(|| async { "pong" })));

        let response = app
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
