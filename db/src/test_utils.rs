use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::cooking::{Category, NewRecipe, Recipe};

/// A fresh, migrated, in-memory database.
///
/// The pool is pinned to a single connection that never idles out, since an
/// in-memory SQLite database only lives as long as its connection.
pub async fn create_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("in-memory sqlite url is valid")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    crate::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn make_category(pool: &SqlitePool, name: &str) -> Category {
    Category::create(pool, name.to_string())
        .await
        .expect("Failed to create category")
}

/// Builder for recipes in tests. Defaults to a published recipe in a new
/// `Category` category.
#[derive(Debug, Clone)]
pub struct RecipeFixture {
    title: String,
    description: String,
    preparation_time: i32,
    preparation_time_unit: String,
    servings: i32,
    servings_unit: String,
    preparation_steps: String,
    is_published: bool,
    category_id: Option<i64>,
}

impl Default for RecipeFixture {
    fn default() -> Self {
        Self {
            title: "Recipe Title".to_string(),
            description: "Recipe Description".to_string(),
            preparation_time: 10,
            preparation_time_unit: "minutes".to_string(),
            servings: 5,
            servings_unit: "portions".to_string(),
            preparation_steps: "Recipe Preparation Steps".to_string(),
            is_published: true,
            category_id: None,
        }
    }
}

impl RecipeFixture {
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    #[must_use]
    pub fn preparation(mut self, time: i32, unit: &str) -> Self {
        self.preparation_time = time;
        self.preparation_time_unit = unit.to_string();
        self
    }

    #[must_use]
    pub fn servings(mut self, servings: i32, unit: &str) -> Self {
        self.servings = servings;
        self.servings_unit = unit.to_string();
        self
    }

    #[must_use]
    pub fn steps(mut self, steps: &str) -> Self {
        self.preparation_steps = steps.to_string();
        self
    }

    #[must_use]
    pub fn unpublished(mut self) -> Self {
        self.is_published = false;
        self
    }

    #[must_use]
    pub fn in_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub async fn create(self, pool: &SqlitePool) -> Recipe {
        let category_id = match self.category_id {
            Some(id) => id,
            None => make_category(pool, "Category").await.category_id,
        };

        Recipe::create(
            pool,
            NewRecipe {
                title: self.title,
                description: self.description,
                preparation_time: self.preparation_time,
                preparation_time_unit: self.preparation_time_unit,
                servings: self.servings,
                servings_unit: self.servings_unit,
                preparation_steps: self.preparation_steps,
                is_published: self.is_published,
                category_id,
            },
        )
        .await
        .expect("Failed to create recipe")
    }
}
