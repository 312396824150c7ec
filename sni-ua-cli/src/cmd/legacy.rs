//! sni-ua legacy command

use clap::Args;
use rama_error::{BoxError, ErrorContext as _};
use sni_ua::UserAgent;
use std::io::Write;

#[derive(Debug, Args)]
/// print the Internet Explorer version of a user agent
///
/// Prints `none` if the user agent is not recognised as Internet Explorer.
pub struct CliCommandLegacy {
    /// the user agent to inspect
    user_agent: String,

    #[arg(long, short = 'o')]
    /// print whether the user agent is Internet Explorer older than this version instead
    older_than: Option<f64>,
}

/// run the sni-ua legacy command
pub fn run(cfg: CliCommandLegacy) -> Result<(), BoxError> {
    let user_agent = UserAgent::new(cfg.user_agent);
    let mut stdout = std::io::stdout().lock();
    write_legacy(&mut stdout, &user_agent, cfg.older_than)?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn write_legacy(
    w: &mut impl Write,
    user_agent: &UserAgent,
    older_than: Option<f64>,
) -> Result<(), BoxError> {
    match older_than {
        Some(threshold) => writeln!(w, "{}", user_agent.is_legacy_version_older_than(threshold)),
        None => match user_agent.legacy_version() {
            Some(version) => writeln!(w, "{version:?}"),
            None => writeln!(w, "none"),
        },
    }
    .context("write legacy version")?;
    Ok(())
}
