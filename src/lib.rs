//! Server Name Indication (SNI) support classification for User Agents.
//!
//! This crate answers a single question for a TLS serving component:
//! "can the client behind this `User-Agent` (header) value be expected
//! to send the SNI extension in its TLS `ClientHello`?". The answer is
//! used to pick a TLS strategy (e.g. a dedicated IP/certificate vs a shared one).
//!
//! ```
//! use sni_ua::{UserAgent, SniRuleKind};
//!
//! let ua = UserAgent::new(
//!     "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:30.0) Gecko/20100101 Firefox/30.0",
//! );
//! assert!(ua.supports_sni());
//! assert_eq!(ua.sni_support().rule, Some(SniRuleKind::Firefox));
//!
//! let ie8 = "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)";
//! assert!(sni_ua::supports_sni(ie8));
//! assert!(sni_ua::is_legacy_version_older_than(ie8, 9.0));
//! assert!(!sni_ua::is_legacy_version_older_than(ie8, 8.0));
//! ```
//!
//! # Remarks
//!
//! The classification is an allow-list: a fixed, ordered list of
//! [`SniRule`]s is evaluated (see [`SNI_RULES`]) and the first
//! conclusive verdict wins. User Agents that no rule recognises are
//! considered to _not_ support SNI.
//!
//! Matching is case-sensitive and no normalization of the
//! User Agent is done. Versions are compared as `f64`, which is fine
//! given that the relevant version strings have at most two significant components.
//!
//! Internet Explorer is the only "legacy" browser family for which the version
//! is exposed, see [`extract_legacy_version`] and [`is_legacy_version_older_than`].
//!
//! A diagnostic harness with the fixed set of known User Agents
//! can be found in the [`self_test`] module.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod pattern;

mod version;
#[doc(inline)]
pub use version::{FUTURE_VERSION, MSIE_TOKEN_FALLBACK_VERSION, MSIE_TRIDENT_FALLBACK_VERSION};

mod legacy;
#[doc(inline)]
pub use legacy::{extract_legacy_version, is_legacy_version_older_than};

mod rules;
#[doc(inline)]
pub use rules::{
    SNI_RULES, SniRule, SniRuleKind, SniSupport, UnknownSniRuleKind, classify_sni, supports_sni,
};

mod ua;
#[doc(inline)]
pub use ua::UserAgent;
