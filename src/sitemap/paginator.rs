//! Fixed-size pagination over a content collection.
//!
//! Pages are 1-based. An empty collection still has one (empty) page, so
//! every registered source can be listed in the index.

use crate::content::{ContentCollection, ContentObject};
use crate::error::{SitemapError, SitemapResult};
use std::ops::Range;
use std::sync::Arc;

/// Maximum number of URLs a single sitemap file may list.
pub const DEFAULT_PAGE_SIZE: usize = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: usize,
}

/// One page of a collection.
pub struct Page {
    pub number: usize,
    pub num_pages: usize,
    pub items: Vec<Arc<dyn ContentObject>>,
}

impl Paginator {
    /// `per_page` of zero is treated as one.
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.max(1),
        }
    }

    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages for `count` items (at least one).
    pub const fn num_pages(&self, count: usize) -> usize {
        if count == 0 {
            1
        } else {
            count.div_ceil(self.per_page)
        }
    }

    /// Item index range of page `number`, or `PageNotFound`.
    pub fn bounds(&self, number: usize, count: usize) -> SitemapResult<Range<usize>> {
        let num_pages = self.num_pages(count);
        if number == 0 || number > num_pages {
            return Err(SitemapError::PageNotFound {
                page: number,
                num_pages,
            });
        }

        let start = (number - 1) * self.per_page;
        let end = (start + self.per_page).min(count);
        Ok(start..end)
    }

    /// Slice page `number` out of `collection`.
    pub fn page(&self, collection: &dyn ContentCollection, number: usize) -> SitemapResult<Page> {
        // Single length read so bounds and slice agree on a live collection
        let count = collection.len();
        let range = self.bounds(number, count)?;
        Ok(Page {
            number,
            num_pages: self.num_pages(count),
            items: collection.slice(range),
        })
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Page {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn has_next(&self) -> bool {
        self.number < self.num_pages
    }
}
