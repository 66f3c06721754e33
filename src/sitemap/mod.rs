//! News and Video sitemap generation.
//!
//! ```text
//! registry ─► source (by name) ─► paginator (one page of objects)
//!          ─► profile rules + sanitizer (per object) ─► entries ─► xml
//! ```
//!
//! - **registry**: process-wide name → source map
//! - **source**: a collection, a [`ContentProfile`] and per-source options
//! - **profile**: which fields an entry carries and how each is derived
//! - **assembler**: index listing and per-source page rendering
//! - **xml**: `<urlset>` / `<sitemapindex>` documents

pub mod assembler;
pub mod entry;
pub mod paginator;
pub mod profile;
pub mod registry;
pub mod sanitize;
pub mod source;
pub mod xml;

pub use assembler::{Assembler, INDEX_FILE, INDEX_NAME, IndexEntry, SourcePage, page_file_name};
pub use entry::SitemapEntry;
pub use paginator::{DEFAULT_PAGE_SIZE, Page, Paginator};
pub use profile::{
    ContentProfile, DEFAULT_GENRES, DEFAULT_PLAYER, Field, PLAYER_ID_PLACEHOLDER, PlayerTemplate,
};
pub use registry::{REGISTRY, SourceRegistry, register, register_all};
pub use sanitize::sanitize;
pub use source::{ContentSource, Entries, SourceOptions};
pub use xml::NewsPublication;
