use axum::extract::State;
use db::RecipeRepository;
use maud::{Markup, Render};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::{
    http_server::{templates::base, templates::recipes::RecipeListPage, ResponseResult},
    AppConfig,
};

#[instrument(skip_all)]
pub(crate) async fn home_page(
    State(app): State<AppConfig>,
    State(db): State<SqlitePool>,
) -> ResponseResult<Markup> {
    let page = RecipeListPage {
        title: "Home".to_string(),
        recipes: db.list_published().await?,
    };

    Ok(base(&page.title, &app.app_url("/"), page.render()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use db::{
        test_utils::{create_test_db, RecipeFixture},
        Recipe,
    };

    use crate::http_server::test_helpers::{create_test_app, get};

    #[tokio::test]
    async fn test_home_returns_200() {
        let app = create_test_app(create_test_db().await);

        let (status, _, body) = get(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Home | Recipes</title>"));
    }

    #[tokio::test]
    async fn test_home_shows_no_recipes_found_if_no_recipes() {
        let app = create_test_app(create_test_db().await);

        let (_, _, body) = get(app, "/").await;

        assert!(body.contains("No recipes found"));
    }

    #[tokio::test]
    async fn test_home_loads_recipes() {
        let pool = create_test_db().await;
        RecipeFixture::default()
            .title("T")
            .preparation(30, "minutes")
            .servings(4, "portions")
            .create(&pool)
            .await;
        let published = Recipe::list_published(&pool).await.unwrap();

        let (status, _, body) = get(create_test_app(pool), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(">T</a>"));
        assert!(body.contains("30 minutes"));
        assert!(body.contains("4 portions"));
        assert_eq!(body.matches("data-recipe-id").count(), published.len());
        assert!(!body.contains("No recipes found"));
    }

    #[tokio::test]
    async fn test_home_does_not_load_unpublished_recipes() {
        let pool = create_test_db().await;
        RecipeFixture::default()
            .title("Secret draft")
            .unpublished()
            .create(&pool)
            .await;

        let (_, _, body) = get(create_test_app(pool), "/").await;

        assert!(body.contains("No recipes found"));
        assert!(!body.contains("Secret draft"));
    }

    #[tokio::test]
    async fn test_home_lists_newest_first() {
        let pool = create_test_db().await;
        let older = RecipeFixture::default().title("Older").create(&pool).await;
        let newer = RecipeFixture::default().title("Newer").create(&pool).await;

        let (_, _, body) = get(create_test_app(pool), "/").await;

        let newer_at = body
            .find(&format!(r#"data-recipe-id="{}""#, newer.recipe_id))
            .unwrap();
        let older_at = body
            .find(&format!(r#"data-recipe-id="{}""#, older.recipe_id))
            .unwrap();
        assert!(newer_at < older_at);
    }

    #[tokio::test]
    async fn test_home_does_not_show_preparation_steps() {
        let pool = create_test_db().await;
        RecipeFixture::default()
            .steps("Whisk the eggs vigorously")
            .create(&pool)
            .await;

        let (_, _, body) = get(create_test_app(pool), "/").await;

        assert!(!body.contains("Whisk the eggs vigorously"));
        assert!(body.contains("see more..."));
    }
}
