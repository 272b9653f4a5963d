use axum::extract::State;
use maud::{html, Markup};
use server_kit::app_state::AppState as _;

use crate::{http_server::ResponseResult, state::SITE_NAME, AppState};

pub(crate) async fn versions(State(app): State<AppState>) -> ResponseResult<Markup> {
    sqlx::query("SELECT 1").execute(app.db()).await?;

    Ok(html! {
      p { (SITE_NAME) }
      p { "Version: " (app.version()) }
      p { "Database: ok" }
    })
}
