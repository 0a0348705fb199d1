// Host collaborator seams

use std::path::Path;

use anyhow::Result;

/// Injected "load code by computed path" capability.
///
/// `invalidate` is the host's code-cache eviction hook; platforms without
/// such caching implement it as a no-op. A loader reporting an empty
/// `extension` declares that the host never executes resolved files, which
/// opts the engine out of initializer dispatch and extension completion.
pub trait CodeLoader {
    /// File extension of loadable sources, without the leading dot.
    fn extension(&self) -> &str;

    /// Execute the file at `path`.
    fn load(&self, path: &Path) -> Result<()>;

    /// Drop any cached representation of `path` so the next load re-reads
    /// file bytes.
    fn invalidate(&self, path: &Path);
}

/// Presentation-layer render cache, dropped when the view flag goes cold.
pub trait TemplateCache {
    fn clear(&self);
}

/// Loader for hosts that never execute resolved code.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCodeLoader;

impl CodeLoader for NullCodeLoader {
    fn extension(&self) -> &str {
        ""
    }

    fn load(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn invalidate(&self, _path: &Path) {}
}

/// Template cache for hosts without a presentation layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTemplateCache;

impl TemplateCache for NullTemplateCache {
    fn clear(&self) {}
}
