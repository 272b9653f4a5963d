use std::str::FromStr;

use color_eyre::{eyre::WrapErr, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod cooking;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use sqlx;
pub use sqlx::SqlitePool;

pub use cooking::{Category, CategorySummary, NewRecipe, Recipe};
pub use repository::RecipeRepository;

const DEFAULT_DATABASE_URL: &str = "sqlite://recipes.db";

#[tracing::instrument(err)]
pub async fn setup_db_pool() -> Result<SqlitePool> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    connect(&database_url).await
}

#[tracing::instrument(err)]
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .wrap_err_with(|| format!("Invalid DATABASE_URL {database_url}"))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .wrap_err("Failed to connect to the database")?;

    migrate(&pool).await?;

    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!()
        .run(pool)
        .await
        .wrap_err("Failed to run migrations")?;

    tracing::info!("Migrations applied");

    Ok(())
}
