use maud::{html, Markup, Render};

use crate::state::SITE_NAME;

pub fn head(title: &str, canonical_url: &str) -> Markup {
    html! {
      head {
        meta charset="UTF-8";
        meta name="viewport" content="width=device-width, initial-scale=1";

        title { (title) }
        link rel="canonical" href=(canonical_url);
        link rel="stylesheet" href="/static/styles.css";
      }
    }
}

struct HeaderLink {
    href: &'static str,
    text: &'static str,
}

impl Render for HeaderLink {
    fn render(&self) -> Markup {
        html! {
          li {
            a href=(self.href) { (self.text) }
          }
        }
    }
}

pub fn header() -> Markup {
    html! {
      header class="main-header" {
        a href="/" { (SITE_NAME) }

        nav {
          ul {
            (HeaderLink { href: "/", text: "Home" })
          }
        }
      }
    }
}

pub fn footer() -> Markup {
    html! {
      footer class="main-footer" {
        p { "Made with Rust and a lot of coffee." }
      }
    }
}
