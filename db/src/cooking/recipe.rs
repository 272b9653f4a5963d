use chrono::NaiveDateTime;
use color_eyre::{eyre::eyre, Result};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Every read joins the owning category so pages can link to it.
const SELECT_RECIPES: &str = r"
    SELECT
        r.recipe_id,
        r.title,
        r.description,
        r.preparation_time,
        r.preparation_time_unit,
        r.servings,
        r.servings_unit,
        r.preparation_steps,
        r.is_published,
        r.category_id,
        c.name AS category_name,
        r.created_at,
        r.updated_at
    FROM recipes r
    JOIN categories c ON c.category_id = r.category_id
";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Recipe {
    pub recipe_id: i64,
    pub title: String,
    pub description: String,
    pub preparation_time: i32,
    pub preparation_time_unit: String,
    pub servings: i32,
    pub servings_unit: String,
    pub preparation_steps: String,
    pub is_published: bool,
    pub category_id: i64,
    pub category_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub preparation_time: i32,
    pub preparation_time_unit: String,
    pub servings: i32,
    pub servings_unit: String,
    pub preparation_steps: String,
    pub is_published: bool,
    pub category_id: i64,
}

impl Recipe {
    /// e.g. `30 minutes`
    pub fn preparation(&self) -> String {
        format!("{} {}", self.preparation_time, self.preparation_time_unit)
    }

    /// e.g. `4 portions`
    pub fn yields(&self) -> String {
        format!("{} {}", self.servings, self.servings_unit)
    }

    pub async fn create(pool: &SqlitePool, new: NewRecipe) -> Result<Self> {
        let (recipe_id,) = sqlx::query_as::<_, (i64,)>(
            r"
            INSERT INTO recipes (
                title, description, preparation_time, preparation_time_unit,
                servings, servings_unit, preparation_steps, is_published, category_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING recipe_id
            ",
        )
        .bind(new.title)
        .bind(new.description)
        .bind(new.preparation_time)
        .bind(new.preparation_time_unit)
        .bind(new.servings)
        .bind(new.servings_unit)
        .bind(new.preparation_steps)
        .bind(new.is_published)
        .bind(new.category_id)
        .fetch_one(pool)
        .await?;

        Self::get_by_id(pool, recipe_id)
            .await?
            .ok_or_else(|| eyre!("Recipe {recipe_id} vanished right after insert"))
    }

    /// Looks a recipe up regardless of whether it is published.
    pub async fn get_by_id(pool: &SqlitePool, recipe_id: i64) -> Result<Option<Self>> {
        let sql = format!("{SELECT_RECIPES} WHERE r.recipe_id = $1");

        let recipe = sqlx::query_as::<_, Recipe>(&sql)
            .bind(recipe_id)
            .fetch_optional(pool)
            .await?;

        Ok(recipe)
    }

    pub async fn find_published_by_id(pool: &SqlitePool, recipe_id: i64) -> Result<Option<Self>> {
        let sql = format!("{SELECT_RECIPES} WHERE r.recipe_id = $1 AND r.is_published = TRUE");

        let recipe = sqlx::query_as::<_, Recipe>(&sql)
            .bind(recipe_id)
            .fetch_optional(pool)
            .await?;

        Ok(recipe)
    }

    pub async fn list_published(pool: &SqlitePool) -> Result<Vec<Self>> {
        let sql = format!("{SELECT_RECIPES} WHERE r.is_published = TRUE ORDER BY r.recipe_id DESC");

        let recipes = sqlx::query_as::<_, Recipe>(&sql).fetch_all(pool).await?;

        Ok(recipes)
    }

    pub async fn list_published_by_category(
        pool: &SqlitePool,
        category_id: i64,
    ) -> Result<Vec<Self>> {
        let sql = format!(
            "{SELECT_RECIPES} WHERE r.category_id = $1 AND r.is_published = TRUE ORDER BY r.recipe_id DESC"
        );

        let recipes = sqlx::query_as::<_, Recipe>(&sql)
            .bind(category_id)
            .fetch_all(pool)
            .await?;

        Ok(recipes)
    }

    pub async fn set_published(&self, pool: &SqlitePool, is_published: bool) -> Result<Self> {
        sqlx::query(
            r"
            UPDATE recipes
            SET is_published = $2,
                updated_at = CURRENT_TIMESTAMP
            WHERE recipe_id = $1
            ",
        )
        .bind(self.recipe_id)
        .bind(is_published)
        .execute(pool)
        .await?;

        Self::get_by_id(pool, self.recipe_id)
            .await?
            .ok_or_else(|| eyre!("Recipe {} no longer exists", self.recipe_id))
    }
}
