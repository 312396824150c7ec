use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

/// A handle to the `sni-ua` binary, built on demand.
#[derive(Debug)]
pub(crate) struct SniUaCli;

impl SniUaCli {
    fn command() -> Command {
        escargot::CargoBuild::new()
            .package("sni-ua-cli")
            .bin("sni-ua")
            .target_dir("./target/")
            .run()
            .unwrap()
            .command()
    }

    /// Run any sni-ua cmd, and return its output, regardless of the exit status.
    pub(crate) fn output(args: &[&str], stdin: Option<&str>) -> Output {
        let mut child = Self::command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        let mut child_stdin = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            child_stdin.write_all(input.as_bytes()).unwrap();
        }
        drop(child_stdin);

        child.wait_with_output().unwrap()
    }

    /// Run any sni-ua cmd that is expected to succeed, and return its stdout.
    pub(crate) fn run(args: &[&str]) -> String {
        Self::run_with_stdin(args, None)
    }

    /// Same as [`Self::run`] but feeding the given input as stdin.
    pub(crate) fn run_with_stdin(args: &[&str], stdin: Option<&str>) -> String {
        let output = Self::output(args, stdin);
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}
