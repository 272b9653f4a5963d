use db::{setup_db_pool, Category, NewRecipe, Recipe, SqlitePool};
use indoc::indoc;
use tracing::info;

use crate::Result;

struct SeedRecipe {
    title: &'static str,
    description: &'static str,
    preparation: (i32, &'static str),
    servings: (i32, &'static str),
    steps: &'static str,
    is_published: bool,
}

fn seed_catalog() -> Vec<(&'static str, Vec<SeedRecipe>)> {
    vec![
        (
            "Breakfast",
            vec![
                SeedRecipe {
                    title: "Overnight Oats",
                    description: "Creamy oats that are ready when you wake up.",
                    preparation: (5, "minutes"),
                    servings: (2, "portions"),
                    steps: indoc! {"
                        Combine oats, milk and yogurt in a jar.
                        Stir in honey and a pinch of salt.
                        Cover and refrigerate overnight.
                    "},
                    is_published: true,
                },
                SeedRecipe {
                    title: "Shakshuka",
                    description: "Eggs poached in a spiced tomato and pepper sauce.",
                    preparation: (30, "minutes"),
                    servings: (4, "portions"),
                    steps: indoc! {"
                        Soften onion and peppers in olive oil.
                        Add garlic, cumin, paprika and tomatoes and simmer.
                        Make wells in the sauce and crack in the eggs.
                        Cover until the whites are set.
                    "},
                    is_published: true,
                },
            ],
        ),
        (
            "Desserts",
            vec![
                SeedRecipe {
                    title: "Chocolate Mousse",
                    description: "Light and airy with only four ingredients.",
                    preparation: (2, "hours"),
                    servings: (6, "cups"),
                    steps: indoc! {"
                        Melt the chocolate and let it cool slightly.
                        Whip the cream to soft peaks.
                        Fold the chocolate into the cream and chill.
                    "},
                    is_published: true,
                },
                SeedRecipe {
                    title: "Grandma's Secret Pie",
                    description: "Still being tested.",
                    preparation: (90, "minutes"),
                    servings: (8, "slices"),
                    steps: "Not ready yet.",
                    is_published: false,
                },
            ],
        ),
    ]
}

pub(crate) async fn seed_recipes() -> Result<()> {
    let pool = setup_db_pool().await?;

    insert_catalog(&pool).await
}

async fn insert_catalog(pool: &SqlitePool) -> Result<()> {
    for (category_name, recipes) in seed_catalog() {
        let category = Category::create(pool, category_name.to_string()).await?;
        info!(category_id = category.category_id, name = %category.name, "Seeded category");

        for seed in recipes {
            let recipe = Recipe::create(
                pool,
                NewRecipe {
                    title: seed.title.to_string(),
                    description: seed.description.to_string(),
                    preparation_time: seed.preparation.0,
                    preparation_time_unit: seed.preparation.1.to_string(),
                    servings: seed.servings.0,
                    servings_unit: seed.servings.1.to_string(),
                    preparation_steps: seed.steps.to_string(),
                    is_published: seed.is_published,
                    category_id: category.category_id,
                },
            )
            .await?;

            info!(
                recipe_id = recipe.recipe_id,
                title = %recipe.title,
                is_published = recipe.is_published,
                "Seeded recipe"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use db::{test_utils::create_test_db, Category, Recipe};

    use super::*;

    #[tokio::test]
    async fn seeding_creates_categories_and_hides_drafts() {
        let pool = create_test_db().await;

        insert_catalog(&pool).await.unwrap();

        let summaries = Category::summaries(&pool).await.unwrap();
        assert_eq!(summaries.len(), 2);

        let published = Recipe::list_published(&pool).await.unwrap();
        assert_eq!(published.len(), 3);
        assert!(published.iter().all(|r| r.title != "Grandma's Secret Pie"));
    }
}
