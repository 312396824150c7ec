use super::utils;

#[test]
#[ignore]
fn test_help() {
    let lines = utils::SniUaCli::run(&["help"]);
    assert!(lines.contains("sni-ua cli to classify the SNI support of user agents"));
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Commands:"));
    assert!(lines.contains("Options:"));
}

#[test]
#[ignore]
fn test_help_check() {
    let lines = utils::SniUaCli::run(&["help", "check"]);
    assert!(lines.contains("classify the SNI support of user agents"));
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Arguments:"));
    assert!(lines.contains("--json"));
}

#[test]
#[ignore]
fn test_help_legacy() {
    let lines = utils::SniUaCli::run(&["help", "legacy"]);
    assert!(lines.contains("print the Internet Explorer version of a user agent"));
    assert!(lines.contains("--older-than"));
}
