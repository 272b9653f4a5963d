use clap::Subcommand;

use crate::Result;

pub(crate) mod info;
pub(crate) mod seed;

#[derive(Subcommand, Default)]
pub(crate) enum Command {
    /// Run the web server
    #[default]
    Serve,
    /// Insert a handful of demo categories and recipes
    Seed,
    /// Print how many published recipes each category has
    Info {
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve => crate::http_server::cmd::serve().await,
            Command::Seed => seed::seed_recipes().await,
            Command::Info { json } => info::print_info(*json).await,
        }
    }
}
