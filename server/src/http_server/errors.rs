use axum::http::StatusCode;
use axum::response::IntoResponse;
use color_eyre::eyre::eyre;

#[derive(Debug)]
pub struct ServerError(pub(crate) color_eyre::Report, pub(crate) StatusCode);

impl ServerError {
    pub(crate) fn not_found(what: impl std::fmt::Display) -> Self {
        ServerError(eyre!("{what} not found"), StatusCode::NOT_FOUND)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        if self.1.is_server_error() {
            let err: &(dyn std::error::Error + 'static) = self.0.as_ref();
            sentry::capture_error(err);

            tracing::error!(error = ?self.0, status = %self.1, "ServerError");
        } else {
            tracing::info!(error = %self.0, status = %self.1, "Request rejected");
        }

        (self.1, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for ServerError
where
    E: Into<color_eyre::Report>,
{
    fn from(err: E) -> Self {
        ServerError(err.into(), StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_renders_404_with_message() {
        let response = ServerError::not_found("Recipe 7").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body.as_ref(), b"Recipe 7 not found");
    }

    #[test]
    fn other_errors_become_500() {
        let err: ServerError = eyre!("database went away").into();

        assert_eq!(err.1, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
