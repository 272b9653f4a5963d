use db::Recipe;
use maud::{html, Markup, Render};

use crate::http_server::{category_path, LinkTo};

pub(crate) const EMPTY_STATE_MESSAGE: &str = "No recipes found here";

/// Context for the home and category pages.
pub(crate) struct RecipeListPage {
    pub title: String,
    pub recipes: Vec<Recipe>,
}

/// Context for the single recipe page.
pub(crate) struct RecipeDetailPage {
    pub recipe: Recipe,
    pub is_detail_page: bool,
}

pub(crate) struct RecipeCard<'a> {
    pub recipe: &'a Recipe,
    pub is_detail_page: bool,
}

impl Render for RecipeCard<'_> {
    fn render(&self) -> Markup {
        let recipe = self.recipe;

        html! {
          article class="recipe recipe-list-item" data-recipe-id=(recipe.recipe_id) {
            div class="recipe-title-container" {
              h2 class="recipe-title" {
                a href=(recipe.relative_link()) { (recipe.title) }
              }
            }

            div class="recipe-category" {
              a href=(category_path(recipe.category_id)) { (recipe.category_name) }
            }

            div class="recipe-meta-container" {
              div class="recipe-meta recipe-preparation" {
                h3 class="recipe-meta-title" { "Preparation" }
                div class="recipe-meta-text" { (recipe.preparation()) }
              }

              div class="recipe-meta recipe-servings" {
                h3 class="recipe-meta-title" { "Servings" }
                div class="recipe-meta-text" { (recipe.yields()) }
              }
            }

            @if self.is_detail_page {
              div class="preparation-steps" {
                @for step in recipe.preparation_steps.lines().filter(|l| !l.trim().is_empty()) {
                  p { (step) }
                }
              }

              p class="recipe-published" {
                "Published " (recipe.created_at.format("%B %d, %Y").to_string())
              }
            } @else {
              div class="recipe-content" {
                p { (recipe.description) }
              }

              footer class="recipe-footer" {
                a class="recipe-read-more button" href=(recipe.relative_link()) { "see more..." }
              }
            }
          }
        }
    }
}

pub(crate) struct RecipeList<'a>(pub &'a [Recipe]);

impl Render for RecipeList<'_> {
    fn render(&self) -> Markup {
        html! {
          @if self.0.is_empty() {
            div class="center" {
              h1 { (EMPTY_STATE_MESSAGE) }
            }
          } @else {
            div class="main-content-list" {
              @for recipe in self.0 {
                (RecipeCard { recipe, is_detail_page: false })
              }
            }
          }
        }
    }
}

impl Render for RecipeListPage {
    fn render(&self) -> Markup {
        RecipeList(&self.recipes).render()
    }
}

impl Render for RecipeDetailPage {
    fn render(&self) -> Markup {
        html! {
          div class="main-content-detail" {
            (RecipeCard { recipe: &self.recipe, is_detail_page: self.is_detail_page })
          }
        }
    }
}
