//! Configuration sections of `newsmap.toml`.

use crate::site::DEFAULT_SCHEME;
use crate::sitemap::{ContentProfile, DEFAULT_GENRES, DEFAULT_PAGE_SIZE, PlayerTemplate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[site]`: the site-domain collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Bare canonical domain (`example.com`).
    pub domain: String,
    /// URL scheme for generated locations.
    pub scheme: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            domain: String::new(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

/// `[build]`: output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Output directory, relative to the config file.
    pub output: PathBuf,
    /// Objects per sitemap page.
    pub page_size: usize,
    /// Collapse XML whitespace.
    pub minify: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output: "public".into(),
            page_size: DEFAULT_PAGE_SIZE,
            minify: false,
        }
    }
}

/// `[news]`: news sitemap publication info.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsSection {
    pub publication: String,
    pub language: String,
    pub genres: String,
}

impl Default for NewsSection {
    fn default() -> Self {
        Self {
            publication: String::new(),
            language: "en".to_string(),
            genres: DEFAULT_GENRES.to_string(),
        }
    }
}

/// `[video]`: video sitemap settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSection {
    /// Player endpoint with an `{id}` placeholder.
    pub player: PlayerTemplate,
}

/// `[[sources]]`: one registered content source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Registry name, also the output file stem.
    pub name: String,
    pub profile: ContentProfile,
    /// JSON array of content objects, relative to the config file.
    pub path: PathBuf,
    #[serde(default)]
    pub changefreq: Option<String>,
    #[serde(default)]
    pub priority: Option<f64>,
    /// Overrides `[news].genres` for this source.
    #[serde(default)]
    pub genres: Option<String>,
    /// Overrides `[build].page_size` for this source.
    #[serde(default)]
    pub page_size: Option<usize>,
}
