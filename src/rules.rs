use crate::{
    legacy::extract_legacy_version,
    pattern::Pattern,
    version::{FUTURE_VERSION, parse_version_or},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use tracing::trace;

static WINDOWS_NT: Pattern = Pattern::new(r"Windows NT ([0-9]+[\.0-9]*)");
static IPHONE_OS_MAJOR: Pattern = Pattern::new(r"iPhone OS ([0-9])_");
static OPERA_MOBILE: Pattern =
    Pattern::new(r"Android.*Opera Mobi/.* Version/([0-9]+[\.0-9][0-9]*)$");
static OPERA_MINI: Pattern = Pattern::new(r"Android.*Opera Mini/.* Version/([0-9]+[\.0-9][0-9]*)$");
static KONQUEROR: Pattern = Pattern::new(r" Konqueror/([0-9]+[\.0-9]+)");

/// The browser family recognised by an [`SniRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SniRuleKind {
    /// Internet Explorer (`MSIE` token or Trident `rv:`), version 7 or later on Windows Vista or later.
    InternetExplorer,
    /// Chromium based browsers, including Google Chrome for iOS (`CriOS`).
    Chromium,
    /// Firefox, but not Seamonkey.
    Firefox,
    /// Safari and other WebKit browsers, excluding the Android stock browser.
    Safari,
    /// Opera Mobile 10.1 or later on Android.
    OperaMobile,
    /// Opera Mini 11.1 or later on Android.
    OperaMini,
    /// Konqueror 4.7 or later.
    Konqueror,
}

impl SniRuleKind {
    /// All rule kinds, in the order they are evaluated.
    pub const ALL: [Self; 7] = [
        Self::InternetExplorer,
        Self::Chromium,
        Self::Firefox,
        Self::Safari,
        Self::OperaMobile,
        Self::OperaMini,
        Self::Konqueror,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InternetExplorer => "internet-explorer",
            Self::Chromium => "chromium",
            Self::Firefox => "firefox",
            Self::Safari => "safari",
            Self::OperaMobile => "opera-mobile",
            Self::OperaMini => "opera-mini",
            Self::Konqueror => "konqueror",
        }
    }
}

impl fmt::Display for SniRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SniRuleKind {
    type Err = UnknownSniRuleKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSniRuleKind(s.to_owned()))
    }
}

impl Serialize for SniRuleKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SniRuleKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Error returned when parsing an unknown [`SniRuleKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSniRuleKind(String);

impl fmt::Display for UnknownSniRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sni rule kind: {}", self.0)
    }
}

impl std::error::Error for UnknownSniRuleKind {}

/// A single SNI detection rule for one browser family.
///
/// A rule is either conclusive (`Some(supported)`) or
/// it does not apply to the User Agent (`None`), in which case
/// the next rule in [`SNI_RULES`] is tried.
#[derive(Clone, Copy)]
pub struct SniRule {
    kind: SniRuleKind,
    evaluate: fn(&str) -> Option<bool>,
}

impl SniRule {
    /// The browser family this rule recognises.
    #[must_use]
    pub const fn kind(&self) -> SniRuleKind {
        self.kind
    }

    /// Evaluate this rule in isolation.
    #[must_use]
    pub fn evaluate(&self, ua: &str) -> Option<bool> {
        (self.evaluate)(ua)
    }
}

impl fmt::Debug for SniRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SniRule")
            .field("kind", &self.kind)
            .finish()
    }
}

/// The SNI rules, in order of precedence.
///
/// The order matters: e.g. Chromium is checked before Safari,
/// as Chromium User Agents advertise Safari as well.
pub const SNI_RULES: &[SniRule] = &[
    SniRule {
        kind: SniRuleKind::InternetExplorer,
        evaluate: internet_explorer,
    },
    SniRule {
        kind: SniRuleKind::Chromium,
        evaluate: chromium,
    },
    SniRule {
        kind: SniRuleKind::Firefox,
        evaluate: firefox,
    },
    SniRule {
        kind: SniRuleKind::Safari,
        evaluate: safari,
    },
    SniRule {
        kind: SniRuleKind::OperaMobile,
        evaluate: opera_mobile,
    },
    SniRule {
        kind: SniRuleKind::OperaMini,
        evaluate: opera_mini,
    },
    SniRule {
        kind: SniRuleKind::Konqueror,
        evaluate: konqueror,
    },
];

/// The outcome of an SNI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SniSupport {
    /// Whether or not the User Agent is expected to support SNI.
    pub supported: bool,
    /// The rule that made the verdict,
    /// `None` if no rule recognised the User Agent.
    pub rule: Option<SniRuleKind>,
}

impl SniSupport {
    /// Verdict for User Agents that no rule recognises.
    pub const UNRECOGNISED: Self = Self {
        supported: false,
        rule: None,
    };
}

/// Classify the SNI support of a User Agent,
/// returning the verdict and the rule that made it.
///
/// See [`SNI_RULES`] for the rules and their precedence.
#[must_use]
pub fn classify_sni(ua: &str) -> SniSupport {
    for rule in SNI_RULES {
        if let Some(supported) = rule.evaluate(ua) {
            trace!(
                sni.rule = %rule.kind,
                sni.supported = supported,
                "user agent classified"
            );
            return SniSupport {
                supported,
                rule: Some(rule.kind),
            };
        }
    }

    trace!(
        sni.supported = false,
        "user agent not recognised: assume SNI is not supported"
    );
    SniSupport::UNRECOGNISED
}

/// Returns `true` if the User Agent is expected to support SNI.
///
/// Unrecognised User Agents are assumed to not support it.
#[must_use]
pub fn supports_sni(ua: &str) -> bool {
    classify_sni(ua).supported
}

fn internet_explorer(ua: &str) -> Option<bool> {
    let version = extract_legacy_version(ua)?;
    if version < 7.0 {
        return Some(false);
    }

    let Some(text) = WINDOWS_NT.capture(ua) else {
        // unknown for IE on Mac, be conservative,
        // anything else is probably a Windows version we do not recognise
        return Some(!ua.contains("Macintosh"));
    };

    // Windows Vista is NT 6.0
    Some(parse_version_or(text, FUTURE_VERSION, "windows-nt") >= 6.0)
}

fn chromium(ua: &str) -> Option<bool> {
    ["Chrome/", "Chromium/", " CriOS/"]
        .into_iter()
        .any(|token| ua.contains(token))
        .then_some(true)
}

fn firefox(ua: &str) -> Option<bool> {
    (ua.contains("Firefox/") && !ua.contains("Seamonkey/")).then_some(true)
}

fn safari(ua: &str) -> Option<bool> {
    if !ua.contains("Safari/") || ua.contains("Android") || ua.contains("Chrome") {
        return None;
    }

    let ios_major = IPHONE_OS_MAJOR
        .capture(ua)
        .and_then(|text| text.parse::<u8>().ok());
    Some(!ios_major.is_some_and(|major| major < 4))
}

fn opera_mobile(ua: &str) -> Option<bool> {
    let text = OPERA_MOBILE.capture(ua)?;
    (parse_version_or(text, FUTURE_VERSION, "opera-mobile") >= 10.1).then_some(true)
}

// no reliable source for Opera Mini, 11.1 is the oldest version verified by hand
fn opera_mini(ua: &str) -> Option<bool> {
    let text = OPERA_MINI.capture(ua)?;
    (parse_version_or(text, FUTURE_VERSION, "opera-mini") >= 11.1).then_some(true)
}

fn konqueror(ua: &str) -> Option<bool> {
    let text = KONQUEROR.capture(ua)?;
    (parse_version_or(text, FUTURE_VERSION, "konqueror") >= 4.7).then_some(true)
}
