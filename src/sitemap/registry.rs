//! Process-wide registry of named content sources.
//!
//! Empty at process start. Application code registers sources during
//! startup; every render reads a snapshot. Writes go through read-copy-update
//! on an `ArcSwap`, so readers never block and never see a half-applied
//! registration. Registering an existing name replaces it (last writer wins).
//!
//! ```ignore
//! register("news", ContentSource::news(articles));
//! register("videos", ContentSource::video(clips));
//! ```

use super::source::ContentSource;
use crate::{debug, log};
use arc_swap::ArcSwap;
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

/// Source name to source, ordered by name.
pub type SourceMap = BTreeMap<String, Arc<ContentSource>>;

/// Global source registry.
pub static REGISTRY: LazyLock<SourceRegistry> = LazyLock::new(SourceRegistry::new);

/// Register `source` under `name` in the global registry.
pub fn register(name: impl Into<String>, source: ContentSource) {
    REGISTRY.register(name, source);
}

/// Register several sources in one call.
pub fn register_all<N: Into<String>>(sources: impl IntoIterator<Item = (N, ContentSource)>) {
    for (name, source) in sources {
        REGISTRY.register(name, source);
    }
}

#[derive(Debug, Default)]
pub struct SourceRegistry {
    sources: ArcSwap<SourceMap>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `name`. Returns the replaced source, if any.
    pub fn register(
        &self,
        name: impl Into<String>,
        source: ContentSource,
    ) -> Option<Arc<ContentSource>> {
        let name = name.into();
        let profile = source.profile();
        let source = Arc::new(source);

        let previous = self.sources.rcu(|current| {
            let mut next = SourceMap::clone(current);
            next.insert(name.clone(), Arc::clone(&source));
            next
        });

        let replaced = previous.get(&name).cloned();
        if replaced.is_some() {
            debug!("registry"; "replaced source `{}`", name);
        } else {
            log!("registry"; "{} ({})", name, profile);
        }
        replaced
    }

    /// Look up a source by name.
    pub fn get(&self, name: &str) -> Option<Arc<ContentSource>> {
        self.sources.load().get(name).cloned()
    }

    /// Snapshot of every registered source, ordered by name.
    pub fn all(&self) -> Arc<SourceMap> {
        self.sources.load_full()
    }

    pub fn names(&self) -> Vec<String> {
        self.sources.load().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.sources.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.load().is_empty()
    }
}
