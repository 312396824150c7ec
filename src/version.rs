use tracing::debug;

/// Version assumed for an `MSIE <version>` token that cannot be parsed.
///
/// Arbitrarily old, so that any "older than" check on it succeeds.
pub const MSIE_TOKEN_FALLBACK_VERSION: f64 = 4.0;

/// Version assumed for a Trident `rv:<version>` token that cannot be parsed.
///
/// This is the oldest Internet Explorer version using that format.
pub const MSIE_TRIDENT_FALLBACK_VERSION: f64 = 11.0;

/// Version assumed for any other version token that cannot be parsed.
///
/// It is most likely a future version that we do not recognise (yet).
pub const FUTURE_VERSION: f64 = 99.0;

/// Parse `text` as a version number, falling back to `fallback`
/// in case it is not a valid floating point number.
///
/// The rule name is only used for diagnostics.
pub(crate) fn parse_version_or(text: &str, fallback: f64, rule: &'static str) -> f64 {
    match text.parse::<f64>() {
        Ok(version) => version,
        Err(err) => {
            debug!(
                sni.rule = rule,
                version.text = text,
                version.fallback = fallback,
                "invalid version text: use fallback version; err = {err}"
            );
            fallback
        }
    }
}
