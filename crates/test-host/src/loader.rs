use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use cascade_core::CodeLoader;

/// One observed loader interaction, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderEvent {
    Loaded(PathBuf),
    Invalidated(PathBuf),
}

#[derive(Default)]
struct LoaderState {
    events: Vec<LoaderEvent>,
    fail_on: Option<PathBuf>,
}

/// In-memory code loader for engine test scenarios.
///
/// Records every load and eviction in call order, and can be scripted to
/// fail on one path to exercise initializer error propagation.
#[derive(Clone)]
pub struct InMemoryCodeLoader {
    extension: String,
    state: Arc<Mutex<LoaderState>>,
}

impl InMemoryCodeLoader {
    /// Create a loader for files with the given extension. An empty
    /// extension models a host that never executes resolved code.
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            state: Arc::new(Mutex::new(LoaderState::default())),
        }
    }

    /// Script the loader to fail when asked to load `path`.
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().fail_on = Some(path.into());
    }

    /// All observed interactions, in call order.
    pub fn events(&self) -> Vec<LoaderEvent> {
        self.state.lock().unwrap().events.clone()
    }

    /// Paths loaded so far, in call order.
    pub fn loaded(&self) -> Vec<PathBuf> {
        self.state
            .lock()
            .unwrap()
            .events
            .iter()
            .filter_map(|event| match event {
                LoaderEvent::Loaded(path) => Some(path.clone()),
                LoaderEvent::Invalidated(_) => None,
            })
            .collect()
    }

    /// Paths evicted so far, in call order.
    pub fn invalidated(&self) -> Vec<PathBuf> {
        self.state
            .lock()
            .unwrap()
            .events
            .iter()
            .filter_map(|event| match event {
                LoaderEvent::Invalidated(path) => Some(path.clone()),
                LoaderEvent::Loaded(_) => None,
            })
            .collect()
    }
}

impl CodeLoader for InMemoryCodeLoader {
    fn extension(&self) -> &str {
        &self.extension
    }

    fn load(&self, path: &Path) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_on.as_deref() == Some(path) {
            bail!("scripted failure for {}", path.display());
        }
        state.events.push(LoaderEvent::Loaded(path.to_path_buf()));
        Ok(())
    }

    fn invalidate(&self, path: &Path) {
        self.state
            .lock()
            .unwrap()
            .events
            .push(LoaderEvent::Invalidated(path.to_path_buf()));
    }
}
