use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cascade_core::TemplateCache;

/// Presentation-layer stand-in that counts cache clears.
#[derive(Clone, Default)]
pub struct InMemoryTemplateCache {
    clears: Arc<AtomicUsize>,
}

impl InMemoryTemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl TemplateCache for InMemoryTemplateCache {
    fn clear(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}
