//! Internet Explorer, the legacy browser family for which a version is extracted.

use crate::{
    pattern::Pattern,
    version::{MSIE_TOKEN_FALLBACK_VERSION, MSIE_TRIDENT_FALLBACK_VERSION, parse_version_or},
};

/// e.g. `MSIE 8.0` or `MSIE 7.0b`
static MSIE_TOKEN: Pattern = Pattern::new(r"MSIE ([0-9]+[\.0-9]*)");

/// IE11 and later dropped the `MSIE` token, e.g.
/// `Mozilla/5.0 (Windows NT 6.3; WOW64; Trident/7.0; Touch; rv:11.0) like Gecko`
static MSIE_TRIDENT: Pattern =
    Pattern::new(r"Mozilla/[0-9]\.0.*Trident/[0-9\.]+; .*rv:([0-9]+[\.0-9])");

/// Extract the Internet Explorer version from a User Agent.
///
/// Returns `None` in case the User Agent is not recognised as Internet Explorer.
/// Version text that cannot be parsed results in a fallback version
/// ([`MSIE_TOKEN_FALLBACK_VERSION`] or [`MSIE_TRIDENT_FALLBACK_VERSION`])
/// rather than `None`.
///
/// [`MSIE_TOKEN_FALLBACK_VERSION`]: crate::MSIE_TOKEN_FALLBACK_VERSION
/// [`MSIE_TRIDENT_FALLBACK_VERSION`]: crate::MSIE_TRIDENT_FALLBACK_VERSION
#[must_use]
pub fn extract_legacy_version(ua: &str) -> Option<f64> {
    if let Some(text) = MSIE_TOKEN.capture(ua) {
        return Some(parse_version_or(
            text,
            MSIE_TOKEN_FALLBACK_VERSION,
            "msie-token",
        ));
    }

    MSIE_TRIDENT
        .capture(ua)
        .map(|text| parse_version_or(text, MSIE_TRIDENT_FALLBACK_VERSION, "msie-trident"))
}

/// Returns `true` if the User Agent is Internet Explorer
/// with a version strictly older than `version`.
///
/// A User Agent that isn't recognised as Internet Explorer
/// is never considered older.
#[must_use]
pub fn is_legacy_version_older_than(ua: &str, version: f64) -> bool {
    extract_legacy_version(ua).is_some_and(|v| v < version)
}
