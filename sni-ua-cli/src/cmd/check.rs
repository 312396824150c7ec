//! sni-ua check command

use clap::Args;
use rama_error::{BoxError, ErrorContext as _};
use serde::Serialize;
use sni_ua::{SniRuleKind, UserAgent};
use std::io::{BufRead as _, Write};

#[derive(Debug, Args)]
/// classify the SNI support of user agents
///
/// Each user agent is printed on its own line as
/// `<supported|unsupported> <TAB> <rule|default> <TAB> <user agent>`.
pub struct CliCommandCheck {
    /// user agents to classify
    ///
    /// Read from stdin (one per line) if none are given.
    user_agents: Vec<String>,

    #[arg(long, short = 'j')]
    /// print one json object per user agent instead
    json: bool,
}

#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    user_agent: &'a str,
    supports_sni: bool,
    rule: Option<SniRuleKind>,
    legacy_version: Option<f64>,
}

/// run the sni-ua check command
pub fn run(cfg: CliCommandCheck) -> Result<(), BoxError> {
    let mut stdout = std::io::stdout().lock();

    if cfg.user_agents.is_empty() {
        tracing::debug!("no user agents given as arguments: read them from stdin");
        for line in std::io::stdin().lock().lines() {
            let line = line.context("read user agent from stdin")?;
            if line.is_empty() {
                continue;
            }
            write_classification(&mut stdout, &line, cfg.json)?;
        }
    } else {
        for ua in &cfg.user_agents {
            write_classification(&mut stdout, ua, cfg.json)?;
        }
    }

    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn write_classification(w: &mut impl Write, ua: &str, json: bool) -> Result<(), BoxError> {
    let user_agent = UserAgent::new(ua);
    let support = user_agent.sni_support();

    tracing::debug!(
        user_agent.original = ua,
        sni.supported = support.supported,
        sni.rule = ?support.rule,
        "user agent classified"
    );

    if json {
        let output = CheckOutput {
            user_agent: user_agent.header_str(),
            supports_sni: support.supported,
            rule: support.rule,
            legacy_version: user_agent.legacy_version(),
        };
        serde_json::to_writer(&mut *w, &output).context("write json classification")?;
        writeln!(w).context("write json classification")?;
    } else {
        writeln!(
            w,
            "{}\t{}\t{user_agent}",
            if support.supported {
                "supported"
            } else {
                "unsupported"
            },
            support.rule.map_or("default", SniRuleKind::as_str),
        )
        .context("write classification")?;
    }

    Ok(())
}
