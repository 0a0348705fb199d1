pub mod loader;
pub mod templates;

pub use loader::{InMemoryCodeLoader, LoaderEvent};
pub use templates::InMemoryTemplateCache;

pub fn host_name() -> &'static str {
    "test-host"
}
