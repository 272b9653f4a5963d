use axum::response::Response;
use db::{Category, Recipe};
use include_dir::{include_dir, Dir};

use errors::ServerError;

pub(crate) mod cmd;
mod config;
pub(crate) mod errors;
pub(crate) mod routes;
mod templates;

pub(crate) mod pages {
    pub mod admin;
    pub mod category;
    pub mod home;
    pub mod recipe;
}

#[cfg(test)]
pub(crate) mod test_helpers;

static STATIC_ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/static");

type ResponseResult<T = Response> = Result<T, ServerError>;

pub(crate) trait LinkTo {
    fn relative_link(&self) -> String;
}

pub(crate) fn category_path(category_id: i64) -> String {
    format!("/category/{category_id}/")
}

impl LinkTo for Category {
    fn relative_link(&self) -> String {
        category_path(self.category_id)
    }
}

impl LinkTo for Recipe {
    fn relative_link(&self) -> String {
        format!("/recipe/{}/", self.recipe_id)
    }
}
