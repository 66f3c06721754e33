//! Content sources: a collection, a profile and per-source options.
//!
//! A source is built once at startup, registered, and never mutated
//! afterwards. Its collection stays owned by the application; every call
//! to [`ContentSource::entries`] slices the collection's current state.

use super::entry::SitemapEntry;
use super::paginator::{DEFAULT_PAGE_SIZE, Page, Paginator};
use super::profile::{ContentProfile, DeriveContext, Field, PlayerTemplate};
use crate::content::{ContentCollection, ContentObject, FieldValue};
use crate::error::SitemapResult;
use crate::site::SiteDomain;
use std::fmt;
use std::sync::Arc;

/// Per-source settings applied on top of the profile rules.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceOptions {
    /// Used when an object has no `changefreq`.
    pub changefreq: Option<String>,
    /// Used when an object has no `priority`.
    pub priority: Option<f64>,
    /// News genres override.
    pub genres: Option<String>,
    /// Video player endpoint.
    pub player: PlayerTemplate,
    pub page_size: usize,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            changefreq: None,
            priority: None,
            genres: None,
            player: PlayerTemplate::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SourceOptions {
    /// Source-level fallback for `field`.
    pub fn default_for(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::Changefreq => self.changefreq.clone().map(FieldValue::Text),
            Field::Priority => self.priority.map(FieldValue::Number),
            _ => None,
        }
    }
}

/// A paginated provider of content objects with a fixed profile.
pub struct ContentSource {
    collection: Arc<dyn ContentCollection>,
    profile: ContentProfile,
    options: Arc<SourceOptions>,
    paginator: Paginator,
}

impl ContentSource {
    pub fn new(collection: Arc<dyn ContentCollection>, profile: ContentProfile) -> Self {
        Self::with_options(collection, profile, SourceOptions::default())
    }

    pub fn with_options(
        collection: Arc<dyn ContentCollection>,
        profile: ContentProfile,
        options: SourceOptions,
    ) -> Self {
        Self {
            collection,
            profile,
            paginator: Paginator::new(options.page_size),
            options: Arc::new(options),
        }
    }

    pub fn news(collection: Arc<dyn ContentCollection>) -> Self {
        Self::new(collection, ContentProfile::News)
    }

    pub fn video(collection: Arc<dyn ContentCollection>) -> Self {
        Self::new(collection, ContentProfile::Video)
    }

    pub const fn profile(&self) -> ContentProfile {
        self.profile
    }

    pub fn options(&self) -> &SourceOptions {
        &self.options
    }

    /// Current object count.
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Current number of pages (at least one).
    pub fn num_pages(&self) -> usize {
        self.paginator.num_pages(self.collection.len())
    }

    /// Objects of page `number`.
    pub fn page(&self, number: usize) -> SitemapResult<Page> {
        self.paginator.page(self.collection.as_ref(), number)
    }

    /// Lazy entries for page `number`.
    ///
    /// Fails with `PageNotFound` outside `1..=num_pages`. The page's objects
    /// are selected up front; each entry is derived on `next()`.
    pub fn entries(&self, number: usize, site: &dyn SiteDomain) -> SitemapResult<Entries> {
        let page = self.page(number)?;
        Ok(Entries {
            profile: self.profile,
            options: Arc::clone(&self.options),
            base_url: site.base_url(),
            num_pages: page.num_pages,
            items: page.items.into_iter(),
        })
    }
}

impl fmt::Debug for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentSource")
            .field("profile", &self.profile)
            .field("len", &self.collection.len())
            .field("options", &self.options)
            .finish()
    }
}

/// Finite, single-pass sequence of entries for one page.
pub struct Entries {
    profile: ContentProfile,
    options: Arc<SourceOptions>,
    base_url: String,
    num_pages: usize,
    items: std::vec::IntoIter<Arc<dyn ContentObject>>,
}

impl Entries {
    pub const fn profile(&self) -> ContentProfile {
        self.profile
    }

    /// Page count seen when this page was sliced.
    pub const fn num_pages(&self) -> usize {
        self.num_pages
    }
}

impl Iterator for Entries {
    type Item = SitemapEntry;

    fn next(&mut self) -> Option<SitemapEntry> {
        let obj = self.items.next()?;
        let ctx = DeriveContext {
            base_url: &self.base_url,
            options: &self.options,
        };
        Some(self.profile.entry(obj.as_ref(), &ctx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl ExactSizeIterator for Entries {}
