use regex::Regex;
use std::{fmt, sync::OnceLock};
use tracing::error;

/// A static regex pattern, compiled on first use.
///
/// A pattern that fails to compile never matches,
/// which keeps the classification functions infallible.
pub(crate) struct Pattern {
    source: &'static str,
    regex: OnceLock<Option<Regex>>,
}

impl Pattern {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            source,
            regex: OnceLock::new(),
        }
    }

    fn regex(&self) -> Option<&Regex> {
        self.regex
            .get_or_init(|| {
                Regex::new(self.source)
                    .inspect_err(|err| {
                        error!(
                            pattern = self.source,
                            "failed to compile static pattern: it will never match; err = {err}"
                        );
                    })
                    .ok()
            })
            .as_ref()
    }

    /// Returns the text of the first capture group of the
    /// leftmost match within `haystack`, if any.
    pub(crate) fn capture<'h>(&self, haystack: &'h str) -> Option<&'h str> {
        self.regex()?
            .captures(haystack)?
            .get(1)
            .map(|m| m.as_str())
    }

    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        self.regex().is_some()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}
