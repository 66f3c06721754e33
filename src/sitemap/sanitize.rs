//! Markup cleanup for user-authored text fields.
//!
//! Titles and descriptions often carry inline HTML. Sitemap consumers want
//! plain text, but the editorial convention of italicising quoted titles
//! should survive as a quote character:
//!
//! ```ignore
//! assert_eq!(sanitize("<i>Breaking</i> News"), "'Breaking' News");
//! assert_eq!(sanitize("<b>Bold</b> move"), "Bold move");
//! ```

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `<i>` and `</i>`, any case.
static RE_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?i>").unwrap());

/// Any remaining tag.
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Replace emphasis tags with `'`, then strip every other tag.
///
/// Pure and idempotent.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    // Fast path: nothing that looks like markup
    if !text.contains('<') {
        return Cow::Borrowed(text);
    }

    let quoted = RE_EMPHASIS.replace_all(text, "'");
    if !RE_TAG.is_match(&quoted) {
        return quoted;
    }
    Cow::Owned(RE_TAG.replace_all(&quoted, "").into_owned())
}
