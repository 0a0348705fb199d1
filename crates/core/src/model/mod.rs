pub mod bootstrap;
pub mod config;
pub mod roots;

pub use bootstrap::{Bootstrap, BOOTSTRAP_FILE};
pub use config::{CacheSettings, ConfigDocument, CONFIG_FILE};
pub use roots::{Category, RootSet};
