//! Content objects and optional-field resolution.
//!
//! Sources aggregate heterogeneous records defined by unrelated parts of an
//! application. None of them is required to carry any particular field, so
//! every access goes through [`ContentObject::field`] and may come back
//! empty. Absence is the normal case, never an error.
//!
//! # Resolution
//!
//! ```ignore
//! // First present candidate wins, in order.
//! let title = resolve(obj, TITLE_FIELDS, None);
//! // Same, but skips present-yet-falsy values (empty string, 0, false).
//! let date = resolve_truthy(obj, PUB_DATE_FIELDS);
//! ```

mod collection;
mod json;

pub use collection::{ContentCollection, SharedCollection};
pub use json::{ContentError, JsonObject, load_json_collection, parse_json_collection};

use crate::utils::date::DateTimeUtc;
use serde::Serialize;
use std::fmt;

/// Title candidates, highest priority first.
pub const TITLE_FIELDS: &[&str] = &["short_title", "title", "name", "headline"];

/// Description candidates, highest priority first.
pub const DESCRIPTION_FIELDS: &[&str] = &["short_description", "description"];

/// Publication date candidates, highest priority first.
pub const PUB_DATE_FIELDS: &[&str] = &["pub_date", "creation_date"];

/// An application record exposed to sitemap generation.
///
/// Implementors return `None` for anything they don't carry.
pub trait ContentObject: Send + Sync {
    /// Look up an optional named property.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Site-relative path of the object's canonical page (`/news/42/`).
    fn absolute_path(&self) -> Option<String>;
}

/// A resolved property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Date(DateTimeUtc),
}

impl FieldValue {
    /// Truthiness: empty text, zero and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0,
            Self::Bool(b) => *b,
            Self::Date(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Map text through `f`, leaving other variants untouched.
    pub fn map_text(self, f: impl FnOnce(&str) -> String) -> Self {
        match self {
            Self::Text(s) => Self::Text(f(&s)),
            other => other,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{d}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<DateTimeUtc> for FieldValue {
    fn from(d: DateTimeUtc) -> Self {
        Self::Date(d)
    }
}

/// Return the first candidate present on `obj`, or `default`.
///
/// Priority is absolute: a present earlier candidate shadows every later one,
/// even if its value is empty.
pub fn resolve(
    obj: &dyn ContentObject,
    candidates: &[&str],
    default: Option<FieldValue>,
) -> Option<FieldValue> {
    candidates
        .iter()
        .find_map(|name| obj.field(name))
        .or(default)
}

/// Return the first truthy candidate on `obj`.
pub fn resolve_truthy(obj: &dyn ContentObject, candidates: &[&str]) -> Option<FieldValue> {
    candidates
        .iter()
        .filter_map(|name| obj.field(name))
        .find(FieldValue::is_truthy)
}
