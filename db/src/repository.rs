use async_trait::async_trait;
use color_eyre::Result;
use sqlx::SqlitePool;

use crate::cooking::{Category, Recipe};

/// The reads the public pages are allowed to make. Every recipe query here
/// only ever sees published rows.
///
/// `None` means nothing matched and the caller should treat it as not found.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn list_published(&self) -> Result<Vec<Recipe>>;

    async fn find_category(&self, category_id: i64) -> Result<Option<Category>>;

    async fn find_published_by_category(&self, category_id: i64) -> Result<Vec<Recipe>>;

    async fn find_published_by_id(&self, recipe_id: i64) -> Result<Option<Recipe>>;
}

#[async_trait]
impl RecipeRepository for SqlitePool {
    async fn list_published(&self) -> Result<Vec<Recipe>> {
        Recipe::list_published(self).await
    }

    async fn find_category(&self, category_id: i64) -> Result<Option<Category>> {
        Category::get_by_id(self, category_id).await
    }

    async fn find_published_by_category(&self, category_id: i64) -> Result<Vec<Recipe>> {
        Recipe::list_published_by_category(self, category_id).await
    }

    async fn find_published_by_id(&self, recipe_id: i64) -> Result<Option<Recipe>> {
        Recipe::find_published_by_id(self, recipe_id).await
    }
}
