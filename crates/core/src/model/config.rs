// Live configuration document
// Replaced wholesale on every successful reload; carries the two cache
// policy flags plus arbitrary application settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Logical name of the site configuration file, resolved under the
/// `config` category on every boot cycle.
pub const CONFIG_FILE: &str = "site.yaml";

/// Cache policy flags read on every boot cycle. Both default to enabled,
/// which is the expected production setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "enabled")]
    pub code: bool,
    #[serde(default = "enabled")]
    pub view: bool,
}

fn enabled() -> bool {
    true
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            code: true,
            view: true,
        }
    }
}

/// The live configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(flatten)]
    pub settings: BTreeMap<String, serde_yaml::Value>,
}

impl ConfigDocument {
    /// Look up an arbitrary top-level setting.
    pub fn setting(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.settings.get(key)
    }
}
