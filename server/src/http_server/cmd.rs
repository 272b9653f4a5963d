use server_kit::server::run_server;
use tracing::info;

use crate::{http_server::routes, AppState, Result};

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env().await?;

    info!(base_url = %app_state.app.base_url, "Starting recipes server");

    run_server(routes::make_router().with_state(app_state)).await
}
