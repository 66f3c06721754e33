//! Index and per-source page assembly.
//!
//! The assembler is the boundary toward the routing/rendering layer:
//!
//! - [`Assembler::render_index`] lists every registered source.
//! - [`Assembler::render_source`] produces one page of one source's entries,
//!   tagged with the source profile so the renderer picks the right schema.
//!
//! Unknown names and out-of-range pages are the only failures.

use super::profile::ContentProfile;
use super::registry::{REGISTRY, SourceRegistry};
use super::source::{ContentSource, Entries};
use crate::debug;
use crate::error::{SitemapError, SitemapResult};
use crate::site::SiteDomain;
use std::sync::Arc;

/// A registered source as listed in the index.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub name: String,
    pub source: Arc<ContentSource>,
}

impl IndexEntry {
    /// Absolute URL of every page of this source, page 1 first.
    pub fn page_locations(&self, site: &dyn SiteDomain) -> Vec<String> {
        let base_url = site.base_url();
        (1..=self.source.num_pages())
            .map(|page| format!("{}/{}", base_url, page_file_name(&self.name, page)))
            .collect()
    }
}

/// One rendered page of a source.
pub struct SourcePage {
    pub name: String,
    pub profile: ContentProfile,
    pub number: usize,
    pub num_pages: usize,
    pub entries: Entries,
}

/// Source name reserved for the index document.
pub const INDEX_NAME: &str = "index";

/// File name of the index document.
pub const INDEX_FILE: &str = "index.xml";

/// File name of page `page` of source `name`: `name.xml`, then `name.2.xml`, ...
pub fn page_file_name(name: &str, page: usize) -> String {
    if page <= 1 {
        format!("{name}.xml")
    } else {
        format!("{name}.{page}.xml")
    }
}

pub struct Assembler<'a> {
    registry: &'a SourceRegistry,
    site: &'a dyn SiteDomain,
}

impl<'a> Assembler<'a> {
    pub fn new(registry: &'a SourceRegistry, site: &'a dyn SiteDomain) -> Self {
        Self { registry, site }
    }

    /// Assembler over the global registry.
    pub fn global(site: &'a dyn SiteDomain) -> Self {
        Self::new(&REGISTRY, site)
    }

    pub fn site(&self) -> &'a dyn SiteDomain {
        self.site
    }

    /// Every registered source, ordered by name.
    pub fn render_index(&self) -> Vec<IndexEntry> {
        self.registry
            .all()
            .iter()
            .map(|(name, source)| IndexEntry {
                name: name.clone(),
                source: Arc::clone(source),
            })
            .collect()
    }

    /// Entries of page `page` of source `name`.
    pub fn render_source(&self, name: &str, page: usize) -> SitemapResult<SourcePage> {
        let source = self
            .registry
            .get(name)
            .ok_or_else(|| SitemapError::SourceNotFound(name.to_string()))?;

        let entries = source.entries(page, self.site)?;
        let num_pages = entries.num_pages();
        debug!("render"; "{} page {}/{}: {} entries", name, page, num_pages, entries.len());

        Ok(SourcePage {
            name: name.to_string(),
            profile: source.profile(),
            number: page,
            num_pages,
            entries,
        })
    }
}
