//! Common utilities shared across CLI commands.

use std::sync::Arc;

use anyhow::{Context, Result};

use newsmap::config::SitemapsConfig;
use newsmap::content::load_json_collection;
use newsmap::sitemap::{ContentSource, SourceRegistry};
use newsmap::{debug, log};

/// Load every `[[sources]]` collection and register it under its name.
///
/// Returns the number of registered sources.
pub fn register_sources(config: &SitemapsConfig, registry: &SourceRegistry) -> Result<usize> {
    for source in &config.sources {
        let path = config.source_path(source);
        let objects = load_json_collection(&path)
            .with_context(|| format!("failed to load source `{}`", source.name))?;
        debug!("load"; "{}: {} objects from {}", source.name, objects.len(), path.display());

        let options = config.source_options(source);
        let content = ContentSource::with_options(Arc::new(objects), source.profile, options);
        registry.register(&source.name, content);
    }

    if config.sources.is_empty() {
        log!("warning"; "no [[sources]] configured");
    }
    Ok(config.sources.len())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    pub const NEWS_JSON: &str = r#"[
        {"url": "/news/1/", "title": "First <i>story</i>", "pub_date": "2024-06-15"},
        {"url": "/news/2/", "headline": "Second", "stock_tickers": "NASDAQ:AAPL"},
        "not an object"
    ]"#;

    pub const VIDEOS_JSON: &str = r#"[
        {"url": "/v/1/", "title": "Clip", "external_id": "abc-1",
         "thumbnail": "http://img.test/1.jpg"}
    ]"#;

    /// Write a site with one news and one video source into `dir`.
    pub fn write_site(dir: &Path) -> SitemapsConfig {
        fs::write(dir.join("news.json"), NEWS_JSON).unwrap();
        fs::write(dir.join("videos.json"), VIDEOS_JSON).unwrap();
        let path = dir.join("newsmap.toml");
        fs::write(
            &path,
            r#"
[site]
domain = "example.com"

[news]
publication = "Example Times"

[[sources]]
name = "news"
profile = "news"
path = "news.json"
page_size = 1

[[sources]]
name = "videos"
profile = "video"
path = "videos.json"
"#,
        )
        .unwrap();
        SitemapsConfig::from_path(&path).unwrap()
    }

    #[test]
    fn test_register_sources() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_site(dir.path());
        let registry = SourceRegistry::new();

        assert_eq!(register_sources(&config, &registry).unwrap(), 2);
        assert_eq!(registry.names(), vec!["news".to_string(), "videos".to_string()]);

        let news = registry.get("news").unwrap();
        assert_eq!(news.len(), 2);
        assert_eq!(news.num_pages(), 2);
    }

    #[test]
    fn test_register_sources_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_site(dir.path());
        fs::remove_file(dir.path().join("videos.json")).unwrap();

        let err = register_sources(&config, &SourceRegistry::new()).unwrap_err();
        assert!(format!("{err:#}").contains("videos"));
    }
}
