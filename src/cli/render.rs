//! `index` and `render` commands: print documents to stdout.

use anyhow::Result;

use newsmap::SitemapEntry;
use newsmap::sitemap::Assembler;
use newsmap::sitemap::xml::{self, NewsPublication};

/// The `<sitemapindex>` document.
pub fn index_document(assembler: &Assembler<'_>) -> String {
    xml::render_index(&assembler.render_index(), assembler.site())
}

/// One page of one source, as `<urlset>` XML or as a JSON array of entries.
pub fn page_document(
    assembler: &Assembler<'_>,
    publication: &NewsPublication,
    name: &str,
    page: usize,
    json: bool,
) -> Result<String> {
    let rendered = assembler.render_source(name, page)?;
    if json {
        let entries: Vec<SitemapEntry> = rendered.entries.collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    } else {
        Ok(xml::render_urlset(rendered, publication))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::{register_sources, tests::write_site};
    use newsmap::SitemapError;
    use newsmap::sitemap::SourceRegistry;
    use serde_json::Value;

    #[test]
    fn test_page_document_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_site(dir.path());
        let registry = SourceRegistry::new();
        register_sources(&config, &registry).unwrap();
        let site = config.site();
        let assembler = Assembler::new(&registry, &site);

        let out = page_document(&assembler, &config.publication(), "news", 2, true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["location"], "http://example.com/news/2/");
        assert_eq!(entries[0]["title"], "Second");
        assert_eq!(entries[0]["stock_tickers"], "NASDAQ:AAPL");
        assert_eq!(entries[0]["genres"], "PressRelease");
    }

    #[test]
    fn test_page_document_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_site(dir.path());
        let registry = SourceRegistry::new();
        register_sources(&config, &registry).unwrap();
        let site = config.site();
        let assembler = Assembler::new(&registry, &site);
        let publication = config.publication();

        let err = page_document(&assembler, &publication, "images", 1, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SitemapError>(),
            Some(&SitemapError::SourceNotFound("images".to_string()))
        );

        let err = page_document(&assembler, &publication, "videos", 3, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SitemapError>(),
            Some(SitemapError::PageNotFound { page: 3, num_pages: 1 })
        ));
    }

    #[test]
    fn test_index_document_lists_sources() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_site(dir.path());
        let registry = SourceRegistry::new();
        register_sources(&config, &registry).unwrap();
        let site = config.site();
        let assembler = Assembler::new(&registry, &site);

        let index = index_document(&assembler);
        let news = index.find("news.xml").unwrap();
        let videos = index.find("videos.xml").unwrap();
        assert!(news < videos);
    }
}
