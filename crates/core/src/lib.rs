pub mod engine;
pub mod error;
pub mod model;
pub mod resolver;

pub use engine::hooks::{CodeLoader, NullCodeLoader, NullTemplateCache, TemplateCache};
pub use engine::Engine;
pub use error::{EngineError, Result};
pub use model::bootstrap::{Bootstrap, BOOTSTRAP_FILE};
pub use model::config::{CacheSettings, ConfigDocument, CONFIG_FILE};
pub use model::roots::{Category, RootSet};
