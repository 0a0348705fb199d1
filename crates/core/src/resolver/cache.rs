// Resolution memo tables, one per category

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::error::{EngineError, Result};
use crate::model::roots::Category;
use crate::resolver::search::SearchIndex;

/// Per-category memo of logical name to resolved path.
///
/// Entries are created lazily and destroyed en masse; there is no TTL, no
/// LRU, and no per-entry eviction. The config table is force-cleared before
/// each lookup so configuration edits take effect every cycle - a designed
/// hot-reload exception, not an oversight.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    classes: HashMap<String, PathBuf>,
    views: HashMap<String, PathBuf>,
    config: HashMap<String, PathBuf>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, category: Category) -> &HashMap<String, PathBuf> {
        match category {
            Category::Classes => &self.classes,
            Category::Views => &self.views,
            Category::Config => &self.config,
        }
    }

    fn table_mut(&mut self, category: Category) -> &mut HashMap<String, PathBuf> {
        match category {
            Category::Classes => &mut self.classes,
            Category::Views => &mut self.views,
            Category::Config => &mut self.config,
        }
    }

    /// Memoized resolution. A hit returns without touching the filesystem; a
    /// miss delegates to the search index and stores the result. Failures are
    /// never cached.
    pub fn get_or_resolve(
        &mut self,
        index: &SearchIndex<'_>,
        category: Category,
        name: &str,
    ) -> Result<PathBuf> {
        if category == Category::Config {
            self.clear(Category::Config);
        }

        if let Some(hit) = self.table(category).get(name) {
            return Ok(hit.clone());
        }

        match index.first_existing(name, category) {
            Some(path) => {
                self.table_mut(category).insert(name.to_owned(), path.clone());
                Ok(path)
            }
            None => Err(EngineError::ResolutionFailed {
                name: name.to_owned(),
                category,
                snapshot: self.snapshot(category),
            }),
        }
    }

    /// Drain one table, returning the paths it held so callers can evict
    /// them from any host code cache.
    pub fn clear(&mut self, category: Category) -> Vec<PathBuf> {
        self.table_mut(category)
            .drain()
            .map(|(_, path)| path)
            .collect()
    }

    /// Ordered copy of one table, used for failure diagnostics.
    pub fn snapshot(&self, category: Category) -> BTreeMap<String, PathBuf> {
        self.table(category)
            .iter()
            .map(|(name, path)| (name.clone(), path.clone()))
            .collect()
    }

    pub fn entries(&self, category: Category) -> usize {
        self.table(category).len()
    }
}
