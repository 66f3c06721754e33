//! Current-site lookup used to build absolute URLs.

use std::borrow::Cow;

/// Scheme used when none is configured.
pub const DEFAULT_SCHEME: &str = "http";

/// Canonical domain of the running deployment.
pub trait SiteDomain: Send + Sync {
    /// Bare domain, e.g. `example.com` (no scheme, no trailing slash).
    fn domain(&self) -> Cow<'_, str>;

    fn scheme(&self) -> &str {
        DEFAULT_SCHEME
    }

    /// `scheme://domain`
    fn base_url(&self) -> String {
        format!(
            "{}://{}",
            self.scheme(),
            self.domain().trim_end_matches('/')
        )
    }
}

/// A fixed domain, typically read from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSite {
    domain: String,
    scheme: String,
}

impl StaticSite {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }
}

impl SiteDomain for StaticSite {
    fn domain(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.domain)
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }
}
