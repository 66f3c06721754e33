//! Content profiles: which fields an entry carries and how each is derived.
//!
//! | Field         | News                   | Video                        |
//! |---------------|------------------------|------------------------------|
//! | location      | domain + path          | domain + path                |
//! | changefreq    | object / source        | object / source              |
//! | priority      | object / source        | object / source              |
//! | pub_date      | first truthy date      | first truthy date            |
//! | title         | sanitized chain        | sanitized chain              |
//! | access        | object                 | -                            |
//! | keywords      | object                 | -                            |
//! | genres        | source (PressRelease)  | -                            |
//! | stock_tickers | object                 | -                            |
//! | description   | sanitized chain        | sanitized chain              |
//! | thumbnail_loc | -                      | object `thumbnail`           |
//! | player_loc    | -                      | player template + `external_id` |
//!
//! The common fields are always derived first, in the order above.

use super::entry::SitemapEntry;
use super::source::SourceOptions;
use crate::content::{
    ContentObject, DESCRIPTION_FIELDS, FieldValue, PUB_DATE_FIELDS, TITLE_FIELDS, resolve,
    resolve_truthy,
};
use crate::sitemap::sanitize::sanitize;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Genres value for news entries unless a source overrides it.
pub const DEFAULT_GENRES: &str = "PressRelease";

/// Video player endpoint; `{id}` is replaced by the object's external id.
pub const DEFAULT_PLAYER: &str =
    "http://players.brightcove.net/1372165866/rJCddKdV_default/index.html?videoId={id}";

/// Placeholder substituted in a player template.
pub const PLAYER_ID_PLACEHOLDER: &str = "{id}";

/// Everything but RFC 3986 unreserved characters gets encoded.
const ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Sitemap schema variant of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentProfile {
    News,
    Video,
}

/// Output field of a sitemap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Location,
    Changefreq,
    Priority,
    PubDate,
    Title,
    Access,
    Keywords,
    Genres,
    StockTickers,
    Description,
    ThumbnailLoc,
    PlayerLoc,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Changefreq => "changefreq",
            Self::Priority => "priority",
            Self::PubDate => "pub_date",
            Self::Title => "title",
            Self::Access => "access",
            Self::Keywords => "keywords",
            Self::Genres => "genres",
            Self::StockTickers => "stock_tickers",
            Self::Description => "description",
            Self::ThumbnailLoc => "thumbnail_loc",
            Self::PlayerLoc => "player_loc",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single field is derived.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Site base URL joined with the object's path.
    Location,
    /// First present candidate, else nothing.
    Optional(&'static [&'static str]),
    /// First present candidate, else the source's default for the field.
    SourceDefault(&'static [&'static str]),
    /// First truthy candidate.
    Truthy(&'static [&'static str]),
    /// First present candidate, sanitized.
    Text(&'static [&'static str]),
    /// Source genres, else [`DEFAULT_GENRES`].
    Genres,
    /// Player template filled with the named id field; empty when the id is falsy.
    Player(&'static str),
}

const COMMON_RULES: &[(Field, Rule)] = &[
    (Field::Location, Rule::Location),
    (Field::Changefreq, Rule::SourceDefault(&["changefreq"])),
    (Field::Priority, Rule::SourceDefault(&["priority"])),
    (Field::PubDate, Rule::Truthy(PUB_DATE_FIELDS)),
];

const NEWS_RULES: &[(Field, Rule)] = &[
    (Field::Title, Rule::Text(TITLE_FIELDS)),
    (Field::Access, Rule::Optional(&["access"])),
    (Field::Keywords, Rule::Optional(&["keywords"])),
    (Field::Genres, Rule::Genres),
    (Field::StockTickers, Rule::Optional(&["stock_tickers"])),
    (Field::Description, Rule::Text(DESCRIPTION_FIELDS)),
];

const VIDEO_RULES: &[(Field, Rule)] = &[
    (Field::Title, Rule::Text(TITLE_FIELDS)),
    (Field::Description, Rule::Text(DESCRIPTION_FIELDS)),
    (Field::ThumbnailLoc, Rule::Optional(&["thumbnail"])),
    (Field::PlayerLoc, Rule::Player("external_id")),
];

/// Everything a rule may read besides the object itself.
#[derive(Debug, Clone, Copy)]
pub struct DeriveContext<'a> {
    /// `scheme://domain`, no trailing slash.
    pub base_url: &'a str,
    pub options: &'a SourceOptions,
}

impl ContentProfile {
    /// Profile-specific rules (common rules excluded).
    pub const fn rules(self) -> &'static [(Field, Rule)] {
        match self {
            Self::News => NEWS_RULES,
            Self::Video => VIDEO_RULES,
        }
    }

    /// Rules shared by every profile.
    pub const fn common_rules() -> &'static [(Field, Rule)] {
        COMMON_RULES
    }

    /// Whether entries of this profile carry `field`.
    pub fn has_field(self, field: Field) -> bool {
        Self::common_rules()
            .iter()
            .chain(self.rules())
            .any(|(f, _)| *f == field)
    }

    /// Derive one entry for `obj`: common fields first, then profile fields.
    pub fn entry(self, obj: &dyn ContentObject, ctx: &DeriveContext<'_>) -> SitemapEntry {
        let mut entry = SitemapEntry::new(self);
        for (field, rule) in Self::common_rules().iter().chain(self.rules()) {
            entry.push(*field, rule.apply(*field, obj, ctx));
        }
        entry
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for ContentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Rule {
    /// Derive the value of `field` for `obj`. Never fails.
    pub fn apply(
        self,
        field: Field,
        obj: &dyn ContentObject,
        ctx: &DeriveContext<'_>,
    ) -> Option<FieldValue> {
        match self {
            Self::Location => {
                let path = obj.absolute_path().unwrap_or_default();
                Some(FieldValue::Text(format!("{}{}", ctx.base_url, path)))
            }
            Self::Optional(candidates) => resolve(obj, candidates, None),
            Self::SourceDefault(candidates) => {
                resolve(obj, candidates, ctx.options.default_for(field))
            }
            Self::Truthy(candidates) => resolve_truthy(obj, candidates),
            Self::Text(candidates) => {
                resolve(obj, candidates, None).map(|v| v.map_text(|s| sanitize(s).into_owned()))
            }
            Self::Genres => Some(FieldValue::Text(
                ctx.options
                    .genres
                    .clone()
                    .unwrap_or_else(|| DEFAULT_GENRES.to_string()),
            )),
            Self::Player(id_field) => {
                let location = obj
                    .field(id_field)
                    .filter(FieldValue::is_truthy)
                    .map(|id| ctx.options.player.url_for(&id.to_string()))
                    .unwrap_or_default();
                Some(FieldValue::Text(location))
            }
        }
    }
}

/// Player endpoint template containing [`PLAYER_ID_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerTemplate(String);

impl PlayerTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fill the template with a percent-encoded `id`.
    pub fn url_for(&self, id: &str) -> String {
        let encoded = utf8_percent_encode(id, ID_ENCODE_SET).to_string();
        self.0.replace(PLAYER_ID_PLACEHOLDER, &encoded)
    }
}

impl Default for PlayerTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::Record;
    use crate::utils::date::DateTimeUtc;

    const BASE: &str = "http://example.com";

    fn derive(profile: ContentProfile, obj: &Record, options: &SourceOptions) -> SitemapEntry {
        let ctx = DeriveContext {
            base_url: BASE,
            options,
        };
        profile.entry(obj, &ctx)
    }

    #[test]
    fn test_news_fields_and_order() {
        let entry = derive(
            ContentProfile::News,
            &Record::at("/n/1/"),
            &SourceOptions::default(),
        );
        let fields: Vec<_> = entry.fields().map(|(f, _)| f.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "location",
                "changefreq",
                "priority",
                "pub_date",
                "title",
                "access",
                "keywords",
                "genres",
                "stock_tickers",
                "description",
            ]
        );
    }

    #[test]
    fn test_common_rules_lead_every_profile() {
        let common: Vec<_> = ContentProfile::common_rules()
            .iter()
            .map(|(f, _)| *f)
            .collect();
        assert_eq!(
            common,
            vec![Field::Location, Field::Changefreq, Field::Priority, Field::PubDate]
        );

        for profile in [ContentProfile::News, ContentProfile::Video] {
            let entry = derive(profile, &Record::at("/x/"), &SourceOptions::default());
            let leading: Vec<_> = entry.fields().take(common.len()).map(|(f, _)| f).collect();
            assert_eq!(leading, common);
        }
    }

    #[test]
    fn test_news_never_has_video_fields() {
        assert!(!ContentProfile::News.has_field(Field::ThumbnailLoc));
        assert!(!ContentProfile::News.has_field(Field::PlayerLoc));
        assert!(ContentProfile::News.has_field(Field::Genres));
        assert!(!ContentProfile::Video.has_field(Field::Genres));
        assert!(ContentProfile::Video.has_field(Field::Location));
    }

    #[test]
    fn test_news_genres_default_and_override() {
        let obj = Record::at("/n/1/").with("genres", "Satire");
        let entry = derive(ContentProfile::News, &obj, &SourceOptions::default());
        assert_eq!(entry.text(Field::Genres), Some("PressRelease"));

        let options = SourceOptions {
            genres: Some("Blog".to_string()),
            ..SourceOptions::default()
        };
        let entry = derive(ContentProfile::News, &obj, &options);
        assert_eq!(entry.text(Field::Genres), Some("Blog"));
    }

    #[test]
    fn test_location_joins_base_and_path() {
        let entry = derive(
            ContentProfile::News,
            &Record::at("/n/1/"),
            &SourceOptions::default(),
        );
        assert_eq!(entry.location(), "http://example.com/n/1/");

        let entry = derive(
            ContentProfile::News,
            &Record::default(),
            &SourceOptions::default(),
        );
        assert_eq!(entry.location(), "http://example.com");
    }

    #[test]
    fn test_title_sanitized_short_title_wins() {
        let obj = Record::at("/n/1/")
            .with("short_title", "<i>Breaking</i> News")
            .with("title", "Full title")
            .with("name", "Name");
        let entry = derive(ContentProfile::News, &obj, &SourceOptions::default());
        assert_eq!(entry.text(Field::Title), Some("'Breaking' News"));
    }

    #[test]
    fn test_missing_title_is_absent_not_error() {
        let entry = derive(
            ContentProfile::Video,
            &Record::at("/v/1/"),
            &SourceOptions::default(),
        );
        assert!(entry.contains(Field::Title));
        assert_eq!(entry.get(Field::Title), None);
    }

    #[test]
    fn test_description_chain_sanitized() {
        let obj = Record::at("/v/1/")
            .with("description", "<p>Long</p>")
            .with("short_description", "<b>Short</b>");
        let entry = derive(ContentProfile::Video, &obj, &SourceOptions::default());
        assert_eq!(entry.text(Field::Description), Some("Short"));
    }

    #[test]
    fn test_pub_date_falls_back_to_creation_date() {
        let created = DateTimeUtc::from_ymd(2023, 12, 1);
        let obj = Record::at("/n/1/")
            .with("pub_date", "")
            .with("creation_date", created);
        let entry = derive(ContentProfile::News, &obj, &SourceOptions::default());
        assert_eq!(entry.get(Field::PubDate), Some(&FieldValue::Date(created)));
    }

    #[test]
    fn test_changefreq_priority_source_defaults() {
        let options = SourceOptions {
            changefreq: Some("daily".to_string()),
            priority: Some(0.6),
            ..SourceOptions::default()
        };
        let obj = Record::at("/n/1/").with("priority", 0.9);
        let entry = derive(ContentProfile::News, &obj, &options);
        assert_eq!(entry.text(Field::Changefreq), Some("daily"));
        assert_eq!(entry.get(Field::Priority), Some(&FieldValue::Number(0.9)));

        let entry = derive(ContentProfile::News, &obj, &SourceOptions::default());
        assert_eq!(entry.get(Field::Changefreq), None);
    }

    #[test]
    fn test_player_loc_from_external_id() {
        let obj = Record::at("/v/1/").with("external_id", "abc123");
        let entry = derive(ContentProfile::Video, &obj, &SourceOptions::default());
        assert_eq!(
            entry.text(Field::PlayerLoc),
            Some(
                "http://players.brightcove.net/1372165866/rJCddKdV_default/index.html?videoId=abc123"
            )
        );
    }

    #[test]
    fn test_player_loc_empty_when_id_falsy() {
        for obj in [
            Record::at("/v/1/"),
            Record::at("/v/1/").with("external_id", ""),
            Record::at("/v/1/").with("external_id", 0.0),
        ] {
            let entry = derive(ContentProfile::Video, &obj, &SourceOptions::default());
            assert_eq!(entry.text(Field::PlayerLoc), Some(""));
        }
    }

    #[test]
    fn test_player_loc_numeric_id() {
        let obj = Record::at("/v/1/").with("external_id", 4242.0);
        let entry = derive(ContentProfile::Video, &obj, &SourceOptions::default());
        assert!(entry.text(Field::PlayerLoc).unwrap().ends_with("videoId=4242"));
    }

    #[test]
    fn test_player_template_encodes_id() {
        let template = PlayerTemplate::new("https://player.test/embed?v={id}");
        assert_eq!(template.url_for("a b&c"), "https://player.test/embed?v=a%20b%26c");
        assert_eq!(template.url_for("clip-01_v2"), "https://player.test/embed?v=clip-01_v2");
    }

    #[test]
    fn test_video_thumbnail_passthrough() {
        let obj = Record::at("/v/1/").with("thumbnail", "http://cdn.test/t.jpg");
        let entry = derive(ContentProfile::Video, &obj, &SourceOptions::default());
        assert_eq!(entry.text(Field::ThumbnailLoc), Some("http://cdn.test/t.jpg"));
        assert!(!entry.contains(Field::Genres));
    }

    #[test]
    fn test_profile_deserialize() {
        #[derive(Deserialize)]
        struct Holder {
            profile: ContentProfile,
        }
        let holder: Holder = toml::from_str("profile = \"video\"").unwrap();
        assert_eq!(holder.profile, ContentProfile::Video);
    }
}
