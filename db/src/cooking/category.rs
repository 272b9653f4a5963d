use chrono::NaiveDateTime;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub category_id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// A category together with how many of its recipes are visible to visitors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category_id: i64,
    pub name: String,
    pub published_recipes: i64,
}

impl Category {
    pub async fn create(pool: &SqlitePool, name: String) -> Result<Self> {
        let category = sqlx::query_as::<_, Category>(
            r"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING category_id, name, created_at
            ",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(category)
    }

    pub async fn get_by_id(pool: &SqlitePool, category_id: i64) -> Result<Option<Self>> {
        let category = sqlx::query_as::<_, Category>(
            r"
            SELECT category_id, name, created_at
            FROM categories
            WHERE category_id = $1
            ",
        )
        .bind(category_id)
        .fetch_optional(pool)
        .await?;

        Ok(category)
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>> {
        let categories = sqlx::query_as::<_, Category>(
            r"
            SELECT category_id, name, created_at
            FROM categories
            ORDER BY name ASC, category_id ASC
            ",
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    pub async fn summaries(pool: &SqlitePool) -> Result<Vec<CategorySummary>> {
        let rows = sqlx::query_as::<_, (i64, String, i64)>(
            r"
            SELECT c.category_id, c.name, COUNT(r.recipe_id)
            FROM categories c
            LEFT JOIN recipes r
                ON r.category_id = c.category_id AND r.is_published = TRUE
            GROUP BY c.category_id, c.name
            ORDER BY c.name ASC, c.category_id ASC
            ",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(category_id, name, published_recipes)| CategorySummary {
                category_id,
                name,
                published_recipes,
            })
            .collect())
    }
}
