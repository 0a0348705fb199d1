//! Boot context and lifecycle.
//!
//! `Engine` is the explicit per-process context: it owns the active roots,
//! the adopted module list, the external package list, the resolution memo,
//! and the live configuration document. `init` redirects the engine to an
//! application root; `validate` re-reads configuration once per unit of work
//! and applies the cache policy it declares.

pub mod hooks;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, Result};
use crate::model::bootstrap::Bootstrap;
use crate::model::config::{ConfigDocument, CONFIG_FILE};
use crate::model::roots::{Category, RootSet};
use crate::resolver::cache::ResolutionCache;
use crate::resolver::search::SearchIndex;

use self::hooks::{CodeLoader, TemplateCache};

pub struct Engine {
    roots: RootSet,
    bootstrap: Bootstrap,
    packages: Vec<PathBuf>,
    cache: ResolutionCache,
    config: ConfigDocument,
    code_loader: Box<dyn CodeLoader>,
    templates: Box<dyn TemplateCache>,
}

impl Engine {
    /// Create an engine rooted at its install location. `init` must run
    /// before the first resolution; until then the system root doubles as
    /// the execution root.
    pub fn new(
        system_root: PathBuf,
        code_loader: Box<dyn CodeLoader>,
        templates: Box<dyn TemplateCache>,
    ) -> Self {
        let roots = RootSet::with_defaults(system_root.clone(), system_root, None, None);
        Self {
            roots,
            bootstrap: Bootstrap::default(),
            packages: Vec::new(),
            cache: ResolutionCache::new(),
            config: ConfigDocument::default(),
            code_loader,
            templates,
        }
    }

    /// Boot against an application root, replacing all per-boot state.
    ///
    /// The execution root defaults to the current directory; the application
    /// and module roots default from it. The external package list survives
    /// re-init (process-lifetime, append-only). Fully re-entrant: a second
    /// call replaces the roots, the module list, the caches, and the
    /// configuration with zero leakage from the previous boot.
    pub fn init(
        &mut self,
        exec_root: Option<PathBuf>,
        app_root: Option<PathBuf>,
        module_root: Option<PathBuf>,
    ) -> Result<()> {
        let exec_root = match exec_root {
            Some(path) => path,
            None => std::env::current_dir().map_err(EngineError::ExecutionRoot)?,
        };

        self.roots = RootSet::with_defaults(
            self.roots.system_root.clone(),
            exec_root,
            app_root,
            module_root,
        );
        self.cache = ResolutionCache::new();
        self.config = ConfigDocument::default();
        self.bootstrap = Bootstrap::load(&self.roots.app_root)?.unwrap_or_default();
        debug!(
            app_root = %self.roots.app_root.display(),
            modules = self.bootstrap.modules.len(),
            "boot roots replaced"
        );

        self.reload_config()?;
        self.run_initializers()
    }

    /// Re-read configuration and apply its cache policy. Intended to run
    /// once per unit of work; with both cache flags enabled this is a cheap
    /// config re-read.
    pub fn validate(&mut self) -> Result<()> {
        self.reload_config()?;
        self.apply_cache_policy();
        self.run_initializers()
    }

    /// Register an external package directory. Registration order drives
    /// initializer order; resolution precedence is the reverse.
    pub fn register_package(&mut self, dir: impl Into<PathBuf>) {
        self.packages.push(dir.into());
    }

    /// Resolve a class name to the file that takes effect for it. When the
    /// name carries no extension and the loader declares one, the loader's
    /// extension is appended first.
    pub fn resolve_class(&mut self, name: &str) -> Result<PathBuf> {
        let file = self.class_file_name(name);
        self.resolve(Category::Classes, &file)
    }

    /// Resolve a view template name; the name is used verbatim and the
    /// resolved content is never inspected here.
    pub fn resolve_view(&mut self, name: &str) -> Result<PathBuf> {
        self.resolve(Category::Views, name)
    }

    pub fn config(&self) -> &ConfigDocument {
        &self.config
    }

    pub fn roots(&self) -> &RootSet {
        &self.roots
    }

    pub fn modules(&self) -> &[String] {
        &self.bootstrap.modules
    }

    pub fn packages(&self) -> &[PathBuf] {
        &self.packages
    }

    fn resolve(&mut self, category: Category, name: &str) -> Result<PathBuf> {
        let index = SearchIndex::new(&self.roots, &self.bootstrap.modules, &self.packages);
        self.cache.get_or_resolve(&index, category, name)
    }

    fn class_file_name(&self, name: &str) -> String {
        let ext = self.code_loader.extension();
        if ext.is_empty() || Path::new(name).extension().is_some() {
            name.to_owned()
        } else {
            format!("{name}.{ext}")
        }
    }

    /// Reload the configuration document. The config memo is evicted first
    /// so the lookup always re-reads the filesystem, and the resolved path
    /// is invalidated in the host code cache after parsing. The live
    /// document is replaced only on success, so a failed reload leaves the
    /// previous configuration in effect.
    fn reload_config(&mut self) -> Result<()> {
        self.cache.clear(Category::Config);
        let index = SearchIndex::new(&self.roots, &self.bootstrap.modules, &self.packages);
        let path = self
            .cache
            .get_or_resolve(&index, Category::Config, CONFIG_FILE)
            .map_err(|_| EngineError::ConfigMissing { file: CONFIG_FILE })?;

        let text = std::fs::read_to_string(&path).map_err(|source| EngineError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let document: ConfigDocument =
            serde_yaml::from_str(&text).map_err(|source| EngineError::ConfigParse {
                path: path.clone(),
                source,
            })?;

        self.code_loader.invalidate(&path);
        debug!(path = %path.display(), "configuration reloaded");
        self.config = document;
        Ok(())
    }

    /// Apply the freshly loaded cache policy. The two flags are independent:
    /// clearing one category never affects the other.
    fn apply_cache_policy(&mut self) {
        if !self.config.cache.code {
            for path in self.cache.clear(Category::Classes) {
                self.code_loader.invalidate(&path);
            }
            // Config memo entries also point at loadable files.
            self.cache.clear(Category::Config);
            debug!("class resolution cache cleared");
        }

        if !self.config.cache.view {
            self.cache.clear(Category::Views);
            self.templates.clear();
            debug!("view resolution cache cleared");
        }
    }

    /// Execute each module's optional initializer in declaration order, then
    /// each external package's in registration order. Distinct from
    /// resolution precedence, which is reversed. Errors are fatal for the
    /// cycle; there is no per-module isolation and no retry.
    fn run_initializers(&mut self) -> Result<()> {
        let ext = self.code_loader.extension();
        if ext.is_empty() {
            return Ok(());
        }
        let init_file = format!("init.{ext}");

        for module in &self.bootstrap.modules {
            let path = self.roots.module_root.join(module).join(&init_file);
            run_initializer(self.code_loader.as_ref(), &path)?;
        }
        for package in &self.packages {
            let path = package.join(&init_file);
            run_initializer(self.code_loader.as_ref(), &path)?;
        }
        Ok(())
    }
}

/// Run one initializer if present, then evict it so it can run again next
/// cycle.
fn run_initializer(loader: &dyn CodeLoader, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    loader.load(path).map_err(|source| EngineError::Initializer {
        path: path.to_path_buf(),
        message: format!("{source:#}"),
    })?;
    loader.invalidate(path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::hooks::{NullCodeLoader, NullTemplateCache};

    struct ExtLoader;

    impl CodeLoader for ExtLoader {
        fn extension(&self) -> &str {
            "ext"
        }

        fn load(&self, _path: &Path) -> anyhow::Result<()> {
            Ok(())
        }

        fn invalidate(&self, _path: &Path) {}
    }

    fn engine(loader: Box<dyn CodeLoader>) -> Engine {
        Engine::new(
            PathBuf::from("/opt/engine"),
            loader,
            Box::new(NullTemplateCache),
        )
    }

    #[test]
    fn test_class_names_gain_the_loader_extension() {
        let engine = engine(Box::new(ExtLoader));
        assert_eq!(engine.class_file_name("Foo"), "Foo.ext");
        assert_eq!(engine.class_file_name("models/Person"), "models/Person.ext");
    }

    #[test]
    fn test_explicit_extensions_are_kept() {
        let engine = engine(Box::new(ExtLoader));
        assert_eq!(engine.class_file_name("Foo.other"), "Foo.other");
    }

    #[test]
    fn test_extensionless_loader_uses_names_verbatim() {
        let engine = engine(Box::new(NullCodeLoader));
        assert_eq!(engine.class_file_name("Foo"), "Foo");
    }

    #[test]
    fn test_new_engine_roots_default_from_the_system_root() {
        let engine = engine(Box::new(NullCodeLoader));
        assert_eq!(engine.roots().system_root, Path::new("/opt/engine"));
        assert_eq!(
            engine.roots().app_root,
            Path::new("/opt/engine/application")
        );
    }
}
