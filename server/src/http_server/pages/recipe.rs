use axum::extract::{Path, State};
use db::RecipeRepository;
use maud::{Markup, Render};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::{
    http_server::{
        errors::ServerError, templates::base, templates::recipes::RecipeDetailPage, LinkTo,
        ResponseResult,
    },
    AppConfig,
};

#[instrument(skip(app, db))]
pub(crate) async fn recipe_page(
    Path(recipe_id): Path<i64>,
    State(app): State<AppConfig>,
    State(db): State<SqlitePool>,
) -> ResponseResult<Markup> {
    let recipe = db
        .find_published_by_id(recipe_id)
        .await?
        .ok_or_else(|| ServerError::not_found(format!("Recipe {recipe_id}")))?;

    let canonical_url = app.app_url(&recipe.relative_link());
    let title = recipe.title.clone();
    let page = RecipeDetailPage {
        recipe,
        is_detail_page: true,
    };

    Ok(base(&title, &canonical_url, page.render()))
}
