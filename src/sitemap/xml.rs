//! XML rendering of sitemap pages and the sitemap index.
//!
//! # News page
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:news="http://www.google.com/schemas/sitemap-news/0.9">
//!   <url>
//!     <loc>http://example.com/news/1/</loc>
//!     <news:news>
//!       <news:publication>
//!         <news:name>Example Times</news:name>
//!         <news:language>en</news:language>
//!       </news:publication>
//!       <news:genres>PressRelease</news:genres>
//!       <news:publication_date>2024-06-15</news:publication_date>
//!       <news:title>'Breaking' News</news:title>
//!     </news:news>
//!   </url>
//! </urlset>
//! ```
//!
//! Video pages use `xmlns:video` and a `<video:video>` block instead.
//! Unresolved fields are omitted.

use super::assembler::{IndexEntry, SourcePage};
use super::entry::SitemapEntry;
use super::profile::{ContentProfile, Field};
use crate::site::SiteDomain;
use std::borrow::Cow;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";
const VIDEO_NS: &str = "http://www.google.com/schemas/sitemap-video/1.1";

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Publication block required by news sitemaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsPublication {
    pub name: String,
    pub language: String,
}

/// Render one page of entries as a `<urlset>` document.
pub fn render_urlset(page: SourcePage, publication: &NewsPublication) -> String {
    let profile = page.profile;
    let mut xml = String::with_capacity(4096);

    xml.push_str(XML_DECL);
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    match profile {
        ContentProfile::News => {
            xml.push_str("\" xmlns:news=\"");
            xml.push_str(NEWS_NS);
        }
        ContentProfile::Video => {
            xml.push_str("\" xmlns:video=\"");
            xml.push_str(VIDEO_NS);
        }
    }
    xml.push_str("\">\n");

    for entry in page.entries {
        xml.push_str("  <url>\n");
        push_element(&mut xml, 4, "loc", Some(entry.location()));
        push_field(&mut xml, 4, "changefreq", &entry, Field::Changefreq);
        push_field(&mut xml, 4, "priority", &entry, Field::Priority);
        match profile {
            ContentProfile::News => push_news(&mut xml, &entry, publication),
            ContentProfile::Video => push_video(&mut xml, &entry),
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn push_news(xml: &mut String, entry: &SitemapEntry, publication: &NewsPublication) {
    xml.push_str("    <news:news>\n");
    if !publication.name.is_empty() {
        xml.push_str("      <news:publication>\n");
        push_element(xml, 8, "news:name", Some(publication.name.as_str()));
        if !publication.language.is_empty() {
            push_element(xml, 8, "news:language", Some(publication.language.as_str()));
        }
        xml.push_str("      </news:publication>\n");
    }
    push_field(xml, 6, "news:access", entry, Field::Access);
    push_field(xml, 6, "news:genres", entry, Field::Genres);
    push_field(xml, 6, "news:publication_date", entry, Field::PubDate);
    push_field(xml, 6, "news:title", entry, Field::Title);
    push_field(xml, 6, "news:keywords", entry, Field::Keywords);
    push_field(xml, 6, "news:stock_tickers", entry, Field::StockTickers);
    xml.push_str("    </news:news>\n");
}

fn push_video(xml: &mut String, entry: &SitemapEntry) {
    xml.push_str("    <video:video>\n");
    push_field(xml, 6, "video:thumbnail_loc", entry, Field::ThumbnailLoc);
    push_field(xml, 6, "video:title", entry, Field::Title);
    push_field(xml, 6, "video:description", entry, Field::Description);
    push_field(xml, 6, "video:player_loc", entry, Field::PlayerLoc);
    push_field(xml, 6, "video:publication_date", entry, Field::PubDate);
    xml.push_str("    </video:video>\n");
}

/// Render the `<sitemapindex>` document listing every page of every source.
pub fn render_index(index: &[IndexEntry], site: &dyn SiteDomain) -> String {
    let mut xml = String::with_capacity(256 + index.len() * 96);

    xml.push_str(XML_DECL);
    xml.push_str("<sitemapindex xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in index {
        for location in entry.page_locations(site) {
            xml.push_str("  <sitemap>\n");
            push_element(&mut xml, 4, "loc", Some(location.as_str()));
            xml.push_str("  </sitemap>\n");
        }
    }

    xml.push_str("</sitemapindex>\n");
    xml
}

/// Push `<tag>value</tag>` for a resolved, non-empty field.
fn push_field(xml: &mut String, indent: usize, tag: &str, entry: &SitemapEntry, field: Field) {
    let value = entry.get(field).map(ToString::to_string);
    push_element(xml, indent, tag, value.as_deref());
}

fn push_element(xml: &mut String, indent: usize, tag: &str, value: Option<&str>) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return;
    };
    for _ in 0..indent {
        xml.push(' ');
    }
    xml.push('<');
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

/// Drop indentation and line breaks when `enabled`.
pub fn minify_xml(xml: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(xml);
    }
    Cow::Owned(
        xml.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect(),
    )
}
