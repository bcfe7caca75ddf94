pub mod env;
mod loader;

pub use env::{AppConfig, DirectoryConfig, ScraperConfig};
pub use loader::load_config;
