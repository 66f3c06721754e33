//! Newsmap - News and Video sitemaps from registered content sources.
//!
//! Content lives in independently defined collections. Each collection is
//! wrapped in a [`ContentSource`] with a [`ContentProfile`] and registered
//! under a name; the [`Assembler`] then lists every source and renders any
//! page of any source as sitemap entries.

pub mod config;
pub mod content;
pub mod error;
pub mod logger;
pub mod site;
pub mod sitemap;
pub mod utils;

pub use config::SitemapsConfig;
pub use content::{ContentCollection, ContentObject, FieldValue};
pub use error::{SitemapError, SitemapResult};
pub use site::{SiteDomain, StaticSite};
pub use sitemap::{Assembler, ContentProfile, ContentSource, SitemapEntry, SourceRegistry};
