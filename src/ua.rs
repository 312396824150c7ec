use crate::{SniSupport, classify_sni, extract_legacy_version};
use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

/// A classified User Agent.
///
/// The classification is done once, at creation time,
/// which makes it cheap to query (and clone) afterwards.
#[derive(Debug, Clone)]
pub struct UserAgent {
    header: Arc<str>,
    legacy_version: Option<f64>,
    sni: SniSupport,
}

impl UserAgent {
    /// Create a new [`UserAgent`] from a `User-Agent` (header) value.
    pub fn new(header: impl Into<Arc<str>>) -> Self {
        let header = header.into();
        let legacy_version = extract_legacy_version(&header);
        let sni = classify_sni(&header);
        Self {
            header,
            legacy_version,
            sni,
        }
    }

    /// returns the `User-Agent` (header) value used by the [`UserAgent`].
    #[must_use]
    pub fn header_str(&self) -> &str {
        &self.header
    }

    /// returns the Internet Explorer version, if this is Internet Explorer.
    ///
    /// See [`extract_legacy_version`] for more information.
    #[must_use]
    pub fn legacy_version(&self) -> Option<f64> {
        self.legacy_version
    }

    /// returns `true` if this is Internet Explorer older than `version`.
    ///
    /// See [`is_legacy_version_older_than`](crate::is_legacy_version_older_than)
    /// for more information.
    #[must_use]
    pub fn is_legacy_version_older_than(&self, version: f64) -> bool {
        self.legacy_version.is_some_and(|v| v < version)
    }

    /// returns the [`SniSupport`] classification of the [`UserAgent`].
    #[must_use]
    pub fn sni_support(&self) -> SniSupport {
        self.sni
    }

    /// returns `true` if the [`UserAgent`] is expected to support SNI.
    #[must_use]
    pub fn supports_sni(&self) -> bool {
        self.sni.supported
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)
    }
}

impl From<&str> for UserAgent {
    fn from(header: &str) -> Self {
        Self::new(header)
    }
}

impl From<String> for UserAgent {
    fn from(header: String) -> Self {
        Self::new(header)
    }
}

impl FromStr for UserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
