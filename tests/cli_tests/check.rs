use super::utils;

const FIREFOX: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:30.0) Gecko/20100101 Firefox/30.0";
const KONQUEROR_3_5: &str =
    "Mozilla/5.0 (compatible; Konqueror/3.5; Windows NT 6.0) KHTML/3.5.6 (like Gecko)";

#[test]
#[ignore]
fn test_check_args() {
    let output = utils::SniUaCli::run(&["check", FIREFOX, KONQUEROR_3_5]);
    assert_eq!(
        output,
        format!("supported\tfirefox\t{FIREFOX}\nunsupported\tdefault\t{KONQUEROR_3_5}\n")
    );
}

#[test]
#[ignore]
fn test_check_stdin() {
    let input = format!("{FIREFOX}\n\n{KONQUEROR_3_5}\n");
    let output = utils::SniUaCli::run_with_stdin(&["check"], Some(&input));
    assert_eq!(
        output,
        format!("supported\tfirefox\t{FIREFOX}\nunsupported\tdefault\t{KONQUEROR_3_5}\n")
    );
}

#[test]
#[ignore]
fn test_check_json() {
    let output = utils::SniUaCli::run(&[
        "check",
        "--json",
        "Mozilla/5.0 (Windows NT 6.3; WOW64; Trident/7.0; Touch; rv:11.0) like Gecko",
    ]);
    let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    assert_eq!(value["supports_sni"], true);
    assert_eq!(value["rule"], "internet-explorer");
    assert_eq!(value["legacy_version"], 11.0);
}
