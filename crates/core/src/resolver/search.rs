// Path search index - ordered candidate generation and first-hit selection

use std::path::PathBuf;

use crate::model::roots::{Category, RootSet};

/// Borrowing view over the active roots, module list, and package list.
///
/// Candidate order is fixed: the logical name taken as-is, the application
/// root, modules in reverse declaration order, the system root, then external
/// packages in reverse registration order. Later-declared modules and
/// later-registered packages shadow earlier ones. Ties break purely by list
/// position, never by file metadata.
#[derive(Debug, Clone, Copy)]
pub struct SearchIndex<'a> {
    roots: &'a RootSet,
    modules: &'a [String],
    packages: &'a [PathBuf],
}

impl<'a> SearchIndex<'a> {
    pub fn new(roots: &'a RootSet, modules: &'a [String], packages: &'a [PathBuf]) -> Self {
        Self {
            roots,
            modules,
            packages,
        }
    }

    /// Ordered candidate paths for a logical name, highest priority first.
    pub fn candidates(&self, name: &str, category: Category) -> Vec<PathBuf> {
        let mut list = Vec::with_capacity(3 + self.modules.len() + self.packages.len());
        list.push(PathBuf::from(name));
        list.push(self.roots.app_root.join(category.dir()).join(name));
        for module in self.modules.iter().rev() {
            list.push(
                self.roots
                    .module_root
                    .join(module)
                    .join(category.dir())
                    .join(name),
            );
        }
        list.push(self.roots.system_root.join(category.dir()).join(name));
        for package in self.packages.iter().rev() {
            list.push(package.join(category.dir()).join(name));
        }
        list
    }

    /// First candidate that exists on disk. Existence checks stop at the
    /// first hit; no exhaustive scan.
    pub fn first_existing(&self, name: &str, category: Category) -> Option<PathBuf> {
        self.candidates(name, category)
            .into_iter()
            .find(|candidate| candidate.exists())
    }
}
