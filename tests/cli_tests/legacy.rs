use super::utils;

const IE8: &str = "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)";

#[test]
#[ignore]
fn test_legacy_version() {
    assert_eq!(utils::SniUaCli::run(&["legacy", IE8]), "8.0\n");
    assert_eq!(utils::SniUaCli::run(&["legacy", "curl/8.4.0"]), "none\n");
}

#[test]
#[ignore]
fn test_legacy_older_than() {
    assert_eq!(
        utils::SniUaCli::run(&["legacy", IE8, "--older-than", "9.0"]),
        "true\n"
    );
    assert_eq!(
        utils::SniUaCli::run(&["legacy", IE8, "--older-than", "8.0"]),
        "false\n"
    );
}
