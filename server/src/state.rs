use color_eyre::eyre::Context;
use db::setup_db_pool;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::instrument;
use url::Url;

pub(crate) const SITE_NAME: &str = "Recipes";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub base_url: Url,
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env() -> server_kit::Result<Self> {
        let base_url = std::env::var("APP_BASE_URL")
            .wrap_err("Missing APP_BASE_URL, needed for app launch")?;

        Self::from_base_url(&base_url)
    }

    pub fn from_base_url(base_url: &str) -> server_kit::Result<Self> {
        let base_url = Url::parse(base_url).wrap_err("Invalid APP_BASE_URL not parsable")?;

        Ok(Self { base_url })
    }

    pub fn app_url(&self, path: &str) -> String {
        let mut url = self.base_url.clone();

        url.set_path(path);

        url.into()
    }
}

#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub package_version: &'static str,
}

impl VersionInfo {
    pub(crate) fn from_build() -> Self {
        Self {
            package_version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub app: AppConfig,
    pub versions: VersionInfo,
    pub db: SqlitePool,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub async fn from_env() -> server_kit::Result<Self> {
        let app_state = AppState {
            app: AppConfig::from_env()?,
            versions: VersionInfo::from_build(),
            db: setup_db_pool().await?,
        };

        Ok(app_state)
    }
}

impl server_kit::app_state::AppState for AppState {
    fn version(&self) -> &str {
        self.versions.package_version
    }

    fn db(&self) -> &sqlx::SqlitePool {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_url_replaces_the_path() {
        let config = AppConfig::from_base_url("https://recipes.example.com/ignored").unwrap();

        assert_eq!(
            config.app_url("/recipe/3/"),
            "https://recipes.example.com/recipe/3/"
        );
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        assert!(AppConfig::from_base_url("not a url").is_err());
    }
}
