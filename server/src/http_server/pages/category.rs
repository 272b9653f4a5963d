use axum::extract::{Path, State};
use db::RecipeRepository;
use maud::{Markup, Render};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::{
    http_server::{
        errors::ServerError, templates::base, templates::recipes::RecipeListPage, LinkTo,
        ResponseResult,
    },
    AppConfig,
};

#[instrument(skip(app, db))]
pub(crate) async fn category_page(
    Path(category_id): Path<i64>,
    State(app): State<AppConfig>,
    State(db): State<SqlitePool>,
) -> ResponseResult<Markup> {
    let category = db
        .find_category(category_id)
        .await?
        .ok_or_else(|| ServerError::not_found(format!("Category {category_id}")))?;

    let page = RecipeListPage {
        title: format!("{} - Category", category.name),
        recipes: db.find_published_by_category(category_id).await?,
    };

    Ok(base(
        &page.title,
        &app.app_url(&category.relative_link()),
        page.render(),
    ))
}
