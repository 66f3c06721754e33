//! JSON-backed content objects.
//!
//! Lets the CLI feed sources from plain files: each file holds a JSON array
//! of objects, one per crawlable item.
//!
//! ```json
//! [
//!   { "url": "/news/1/", "title": "<i>Breaking</i> News", "pub_date": "2024-06-15" }
//! ]
//! ```

use super::{ContentObject, FieldValue, PUB_DATE_FIELDS};
use crate::utils::date::DateTimeUtc;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{fs, io};
use thiserror::Error;

/// Keys probed, in order, for the object's canonical path.
const PATH_KEYS: &[&str] = &["url", "absolute_url", "path"];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("invalid JSON in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("`{0}` must contain a JSON array of objects")]
    NotAnArray(PathBuf),
}

/// A content object over a JSON map.
#[derive(Debug, Clone, Default)]
pub struct JsonObject {
    map: Map<String, Value>,
}

impl JsonObject {
    pub fn new(map: Map<String, Value>) -> Self {
        Self { map }
    }
}

impl ContentObject for JsonObject {
    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = self.map.get(name)?;
        let is_date_key = PUB_DATE_FIELDS.contains(&name);

        match value {
            Value::Null | Value::Object(_) => None,
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            Value::Number(n) => n.as_f64().map(FieldValue::Number),
            Value::String(s) if is_date_key => Some(
                DateTimeUtc::parse(s)
                    .map(FieldValue::Date)
                    .unwrap_or_else(|| FieldValue::Text(s.clone())),
            ),
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            // Lists (keywords, stock tickers) render comma-separated
            Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                Some(FieldValue::Text(parts.join(", ")))
            }
        }
    }

    fn absolute_path(&self) -> Option<String> {
        PATH_KEYS
            .iter()
            .find_map(|key| self.map.get(*key)?.as_str())
            .map(str::to_string)
    }
}

/// Parse a JSON array of objects into content objects.
///
/// Non-object array items are skipped.
pub fn parse_json_collection(
    content: &str,
    path: &Path,
) -> Result<Vec<Arc<dyn ContentObject>>, ContentError> {
    let value: Value =
        serde_json::from_str(content).map_err(|err| ContentError::Json(path.to_path_buf(), err))?;

    let Value::Array(items) = value else {
        return Err(ContentError::NotAnArray(path.to_path_buf()));
    };

    let total = items.len();
    let objects: Vec<Arc<dyn ContentObject>> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(Arc::new(JsonObject::new(map)) as Arc<dyn ContentObject>),
            _ => None,
        })
        .collect();

    let skipped = total - objects.len();
    if skipped > 0 {
        crate::log!("content"; "skipped {} non-object items in {}", skipped, path.display());
    }

    Ok(objects)
}

/// Load a JSON collection file from disk.
pub fn load_json_collection(path: &Path) -> Result<Vec<Arc<dyn ContentObject>>, ContentError> {
    let content =
        fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
    parse_json_collection(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => JsonObject::new(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_json_field_types() {
        let obj = object(json!({
            "title": "Hello",
            "priority": 0.5,
            "draft": false,
            "missing": null,
            "nested": { "a": 1 },
        }));

        assert_eq!(obj.field("title"), Some("Hello".into()));
        assert_eq!(obj.field("priority"), Some(FieldValue::Number(0.5)));
        assert_eq!(obj.field("draft"), Some(FieldValue::Bool(false)));
        assert_eq!(obj.field("missing"), None);
        assert_eq!(obj.field("nested"), None);
        assert_eq!(obj.field("absent"), None);
    }

    #[test]
    fn test_json_dates_parsed_for_date_keys() {
        let obj = object(json!({
            "pub_date": "2024-06-15T14:30:45Z",
            "creation_date": "not a date",
            "title": "2024-06-15",
        }));

        assert_eq!(
            obj.field("pub_date"),
            Some(FieldValue::Date(DateTimeUtc::new(2024, 6, 15, 14, 30, 45)))
        );
        assert_eq!(obj.field("creation_date"), Some("not a date".into()));
        assert_eq!(obj.field("title"), Some("2024-06-15".into()));
    }

    #[test]
    fn test_json_arrays_join() {
        let obj = object(json!({ "keywords": ["economy", "markets"] }));
        assert_eq!(obj.field("keywords"), Some("economy, markets".into()));
    }

    #[test]
    fn test_json_absolute_path_fallbacks() {
        assert_eq!(
            object(json!({ "url": "/a/", "path": "/b/" })).absolute_path(),
            Some("/a/".to_string())
        );
        assert_eq!(
            object(json!({ "path": "/b/" })).absolute_path(),
            Some("/b/".to_string())
        );
        assert_eq!(object(json!({})).absolute_path(), None);
    }

    #[test]
    fn test_parse_collection_skips_non_objects() {
        let objects =
            parse_json_collection(r#"[{"url": "/a/"}, 3, {"url": "/b/"}]"#, Path::new("x.json"))
                .unwrap();
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[1].absolute_path().as_deref(), Some("/b/"));
    }

    #[test]
    fn test_parse_collection_errors() {
        let err = parse_json_collection(r#"{"url": "/a/"}"#, Path::new("x.json")).err().unwrap();
        assert!(matches!(err, ContentError::NotAnArray(_)));

        let err = parse_json_collection("[", Path::new("x.json")).err().unwrap();
        assert!(matches!(err, ContentError::Json(..)));
    }

    #[test]
    fn test_load_collection_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.json");
        fs::write(&path, r#"[{"url": "/n/1/", "title": "One"}]"#).unwrap();

        let objects = load_json_collection(&path).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].field("title"), Some("One".into()));

        let err = load_json_collection(&dir.path().join("nope.json")).err().unwrap();
        assert!(matches!(err, ContentError::Io(..)));
    }
}
