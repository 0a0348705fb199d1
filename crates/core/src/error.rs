use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::roots::Category;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("resource '{name}' not found in category '{category}' (cached entries: {snapshot:?})")]
    ResolutionFailed {
        name: String,
        category: Category,
        snapshot: BTreeMap<String, PathBuf>,
    },

    #[error("configuration file '{file}' could not be resolved from any root")]
    ConfigMissing { file: &'static str },

    #[error("failed to read configuration at '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration at '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to read boot descriptor at '{path}'")]
    BootstrapRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse boot descriptor at '{path}'")]
    BootstrapParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("initializer '{path}' failed: {message}")]
    Initializer { path: PathBuf, message: String },

    #[error("cannot determine execution root")]
    ExecutionRoot(#[source] std::io::Error),
}
