#![no_main]

use libfuzzer_sys::fuzz_target;
use sni_ua::{UserAgent, classify_sni, is_legacy_version_older_than};

fuzz_target!(|input: &str| {
    let ua = UserAgent::new(input);
    assert_eq!(ua.sni_support(), classify_sni(input));
    if ua.legacy_version().is_none() {
        assert!(!is_legacy_version_older_than(input, f64::MAX));
    }
});
