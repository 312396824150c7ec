use super::utils;

#[test]
#[ignore]
fn test_self_test() {
    let output = utils::SniUaCli::run(&["self-test"]);
    assert!(output.starts_with("User agent test cases successful..."));
}

#[test]
#[ignore]
fn test_unknown_command_fails() {
    let output = utils::SniUaCli::output(&["self-destruct"], None);
    assert!(!output.status.success());
}
