// Shared fixtures for engine integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use cascade_core::{CodeLoader, Engine, TemplateCache};
use tempfile::TempDir;

/// Write a file under `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

/// Write a site configuration with the given cache flags.
pub fn write_site_config(root: &Path, relative_dir: &str, code: bool, view: bool) -> PathBuf {
    write_file(
        root,
        &format!("{relative_dir}/config/site.yaml"),
        &format!("cache:\n  code: {code}\n  view: {view}\n"),
    )
}

/// A system tree shipping the default configuration, so every boot has a
/// config fallback the way the engine's install tree does in production.
pub fn system_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_site_config(dir.path(), "system", true, true);
    dir
}

#[derive(Default)]
pub struct LoaderLog {
    pub loaded: Vec<PathBuf>,
    pub invalidated: Vec<PathBuf>,
}

/// Code loader that records every load and eviction. Loadable files carry
/// the `ext` extension.
#[derive(Clone, Default)]
pub struct RecordingLoader {
    pub log: Arc<Mutex<LoaderLog>>,
}

impl RecordingLoader {
    pub fn loaded(&self) -> Vec<PathBuf> {
        self.log.lock().unwrap().loaded.clone()
    }

    pub fn invalidated(&self) -> Vec<PathBuf> {
        self.log.lock().unwrap().invalidated.clone()
    }
}

impl CodeLoader for RecordingLoader {
    fn extension(&self) -> &str {
        "ext"
    }

    fn load(&self, path: &Path) -> anyhow::Result<()> {
        self.log.lock().unwrap().loaded.push(path.to_path_buf());
        Ok(())
    }

    fn invalidate(&self, path: &Path) {
        self.log.lock().unwrap().invalidated.push(path.to_path_buf());
    }
}

/// Template cache that counts clear requests.
#[derive(Clone, Default)]
pub struct RecordingTemplates {
    pub clears: Arc<Mutex<usize>>,
}

impl RecordingTemplates {
    pub fn clear_count(&self) -> usize {
        *self.clears.lock().unwrap()
    }
}

impl TemplateCache for RecordingTemplates {
    fn clear(&self) {
        *self.clears.lock().unwrap() += 1;
    }
}

/// Engine wired to recording collaborators, rooted at `{system}/system`.
pub fn engine_at(system: &Path) -> (Engine, RecordingLoader, RecordingTemplates) {
    let loader = RecordingLoader::default();
    let templates = RecordingTemplates::default();
    let engine = Engine::new(
        system.join("system"),
        Box::new(loader.clone()),
        Box::new(templates.clone()),
    );
    (engine, loader, templates)
}
