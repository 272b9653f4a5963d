use maud::{html, Markup, DOCTYPE};

use crate::state::SITE_NAME;

pub(crate) mod header;
pub(crate) mod recipes;

/// `<page title> | Recipes`
pub(crate) fn page_title(title: &str) -> String {
    format!("{title} | {SITE_NAME}")
}

pub(crate) fn base(title: &str, canonical_url: &str, inner: Markup) -> Markup {
    html! {
      (DOCTYPE)
      html lang="en" {
        (header::head(&page_title(title), canonical_url))

        body {
          (header::header())

          main class="main-content container" {
            (inner)
          }

          (header::footer())
        }
      }
    }
}
