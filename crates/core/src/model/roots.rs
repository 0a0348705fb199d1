// Root set and category types
// Defines the search roots active for one boot cycle and the resource
// categories that select a subdirectory under each root.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Resource category; selects the subdirectory searched under each root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Classes,
    Views,
    Config,
}

impl Category {
    /// Subdirectory name under each root.
    pub fn dir(self) -> &'static str {
        match self {
            Category::Classes => "classes",
            Category::Views => "views",
            Category::Config => "config",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

/// Search roots active for one boot cycle.
///
/// `system_root` is fixed for the engine's lifetime; the other three are
/// replaced wholesale by each `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSet {
    pub exec_root: PathBuf,
    pub app_root: PathBuf,
    pub module_root: PathBuf,
    pub system_root: PathBuf,
}

impl RootSet {
    /// Derive a root set, defaulting the application root to
    /// `{exec_root}/application` and the module root to `{exec_root}/modules`.
    pub fn with_defaults(
        system_root: PathBuf,
        exec_root: PathBuf,
        app_root: Option<PathBuf>,
        module_root: Option<PathBuf>,
    ) -> Self {
        let app_root = app_root.unwrap_or_else(|| exec_root.join("application"));
        let module_root = module_root.unwrap_or_else(|| exec_root.join("modules"));
        Self {
            exec_root,
            app_root,
            module_root,
            system_root,
        }
    }
}
