//! Structural errors raised while assembling sitemaps.
//!
//! Missing content fields are never errors; they resolve to defaults
//! inside the profile. Only an unknown source name or a page outside the
//! paginator's range cross the assembler boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SitemapError {
    #[error("sitemap source `{0}` is not registered")]
    SourceNotFound(String),

    #[error("page {page} not found (source has {num_pages} pages)")]
    PageNotFound { page: usize, num_pages: usize },
}

pub type SitemapResult<T> = Result<T, SitemapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SitemapError::SourceNotFound("videos".to_string());
        assert_eq!(format!("{err}"), "sitemap source `videos` is not registered");

        let err = SitemapError::PageNotFound {
            page: 4,
            num_pages: 3,
        };
        let display = format!("{err}");
        assert!(display.contains("page 4"));
        assert!(display.contains("3 pages"));
    }
}
