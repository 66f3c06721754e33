//! Configuration management for `newsmap.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                            |
//! |----------------|----------------------------------------------------|
//! | `[site]`       | Canonical domain and scheme for absolute URLs      |
//! | `[build]`      | Output directory, page size, minification          |
//! | `[news]`       | Publication name/language, default genres          |
//! | `[video]`      | Player endpoint template                           |
//! | `[[sources]]`  | Named content sources (profile + JSON collection)  |

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{BuildSection, NewsSection, SiteSection, SourceConfig, VideoSection};
pub use util::find_config_file;

use crate::log;
use crate::site::StaticSite;
use crate::sitemap::{INDEX_NAME, NewsPublication, PLAYER_ID_PLACEHOLDER, SourceOptions};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Default config file name.
pub const CONFIG_FILE: &str = "newsmap.toml";

/// Root configuration structure representing `newsmap.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitemapsConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory containing the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub news: NewsSection,

    #[serde(default)]
    pub video: VideoSection,

    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

impl SitemapsConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load and validate configuration from file path.
    ///
    /// Unknown fields are reported and ignored.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Check every section, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        static RE_SOURCE_NAME: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

        let mut errors = Vec::new();

        let domain = self.site.domain.trim();
        if domain.is_empty() {
            errors.push("[site.domain] must not be empty".to_string());
        } else if domain.contains("://") || domain.contains('/') {
            errors.push(format!(
                "[site.domain] `{domain}` must be a bare domain (no scheme or path)"
            ));
        } else if url::Url::parse(&format!("{}://{}", self.site.scheme, domain)).is_err() {
            errors.push(format!("[site.domain] `{domain}` is not a valid host"));
        }

        if !matches!(self.site.scheme.as_str(), "http" | "https") {
            errors.push(format!(
                "[site.scheme] `{}` must be `http` or `https`",
                self.site.scheme
            ));
        }

        if self.build.page_size == 0 {
            errors.push("[build.page_size] must be positive".to_string());
        }

        let player = &self.video.player;
        if !player.as_str().contains(PLAYER_ID_PLACEHOLDER) {
            errors.push(format!("[video.player] must contain `{PLAYER_ID_PLACEHOLDER}`"));
        } else if url::Url::parse(&player.url_for("0")).is_err() {
            errors.push(format!("[video.player] `{}` is not a valid URL", player.as_str()));
        }

        let mut seen = HashSet::new();
        for source in &self.sources {
            if !RE_SOURCE_NAME.is_match(&source.name) {
                errors.push(format!(
                    "[sources] name `{}` must match [A-Za-z0-9_-]+",
                    source.name
                ));
            }
            if source.name == INDEX_NAME {
                errors.push(format!(
                    "[sources] name `{INDEX_NAME}` is reserved for the sitemap index"
                ));
            }
            if !seen.insert(source.name.as_str()) {
                errors.push(format!("[sources] duplicate name `{}`", source.name));
            }
            if source.page_size == Some(0) {
                errors.push(format!("[sources.{}.page_size] must be positive", source.name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Site-domain collaborator built from `[site]`.
    pub fn site(&self) -> StaticSite {
        StaticSite::new(self.site.domain.trim()).with_scheme(self.site.scheme.clone())
    }

    /// Publication block for news sitemaps.
    pub fn publication(&self) -> NewsPublication {
        NewsPublication {
            name: self.news.publication.clone(),
            language: self.news.language.clone(),
        }
    }

    /// Effective options of a source: its own settings over the global ones.
    pub fn source_options(&self, source: &SourceConfig) -> SourceOptions {
        SourceOptions {
            changefreq: source.changefreq.clone(),
            priority: source.priority,
            genres: Some(
                source
                    .genres
                    .clone()
                    .unwrap_or_else(|| self.news.genres.clone()),
            ),
            player: self.video.player.clone(),
            page_size: source.page_size.unwrap_or(self.build.page_size),
        }
    }

    /// Absolute path of a source's JSON collection.
    pub fn source_path(&self, source: &SourceConfig) -> PathBuf {
        self.root.join(&source.path)
    }

    /// Absolute output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.build.output)
    }
}
