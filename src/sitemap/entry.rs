//! Sitemap entries handed to the renderer.

use super::profile::{ContentProfile, Field};
use crate::content::FieldValue;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One resolved, sanitized record describing a crawlable item.
///
/// Holds exactly the fields of its profile, in derivation order. A field
/// whose value could not be resolved is kept as `None` and left out of
/// rendered output.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    profile: ContentProfile,
    fields: Vec<(Field, Option<FieldValue>)>,
}

impl SitemapEntry {
    pub fn new(profile: ContentProfile) -> Self {
        Self {
            profile,
            fields: Vec::with_capacity(10),
        }
    }

    pub(crate) fn push(&mut self, field: Field, value: Option<FieldValue>) {
        self.fields.push((field, value));
    }

    pub const fn profile(&self) -> ContentProfile {
        self.profile
    }

    /// Whether the entry's profile includes `field` (resolved or not).
    pub fn contains(&self, field: Field) -> bool {
        self.fields.iter().any(|(f, _)| *f == field)
    }

    /// Resolved value of `field`, if any.
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Resolved text value of `field`, if any.
    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Absolute URL of the item.
    pub fn location(&self) -> &str {
        self.text(Field::Location).unwrap_or_default()
    }

    /// All fields in derivation order, including unresolved ones.
    pub fn fields(&self) -> impl Iterator<Item = (Field, Option<&FieldValue>)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_ref()))
    }

    /// Resolved fields only.
    pub fn resolved(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields
            .iter()
            .filter_map(|(f, v)| v.as_ref().map(|v| (*f, v)))
    }
}

/// Serializes as a flat map of resolved fields.
impl Serialize for SitemapEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (field, value) in self.resolved() {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::DateTimeUtc;

    fn sample() -> SitemapEntry {
        let mut entry = SitemapEntry::new(ContentProfile::News);
        entry.push(Field::Location, Some("http://example.com/a/".into()));
        entry.push(Field::Changefreq, None);
        entry.push(Field::PubDate, Some(DateTimeUtc::from_ymd(2024, 5, 1).into()));
        entry.push(Field::Genres, Some("PressRelease".into()));
        entry
    }

    #[test]
    fn test_entry_accessors() {
        let entry = sample();
        assert_eq!(entry.profile(), ContentProfile::News);
        assert_eq!(entry.location(), "http://example.com/a/");
        assert!(entry.contains(Field::Changefreq));
        assert_eq!(entry.get(Field::Changefreq), None);
        assert!(!entry.contains(Field::PlayerLoc));
        assert_eq!(entry.text(Field::PubDate), None);
        assert_eq!(entry.resolved().count(), 3);
        assert_eq!(entry.fields().count(), 4);
    }

    #[test]
    fn test_entry_serializes_resolved_fields_only() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"location":"http://example.com/a/","pub_date":"2024-05-01","genres":"PressRelease"}"#
        );
    }
}
