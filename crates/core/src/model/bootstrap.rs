// Application boot descriptor
// Ordered module declarations adopted from the active application root.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// File name of the application boot descriptor.
pub const BOOTSTRAP_FILE: &str = "bootstrap.yaml";

/// Ordered module declarations for the active application.
///
/// Declaration order drives initializer execution; resolution precedence is
/// the reverse, so later-declared modules shadow earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bootstrap {
    #[serde(default)]
    pub modules: Vec<String>,
}

impl Bootstrap {
    /// Load `{app_root}/bootstrap.yaml`, if the application declares one.
    pub fn load(app_root: &Path) -> Result<Option<Bootstrap>> {
        let path = app_root.join(BOOTSTRAP_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let text = std::fs::read_to_string(&path).map_err(|source| EngineError::BootstrapRead {
            path: path.clone(),
            source,
        })?;
        let bootstrap =
            serde_yaml::from_str(&text).map_err(|source| EngineError::BootstrapParse {
                path,
                source,
            })?;
        Ok(Some(bootstrap))
    }
}
