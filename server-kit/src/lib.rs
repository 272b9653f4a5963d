pub use sqlx;

pub mod app_state;
pub mod server;
pub mod setup;

pub use color_eyre;
pub use color_eyre::Result;
