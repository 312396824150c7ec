//! entrypoint for sni-ua-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

pub mod cmd;
use self::cmd::{check, legacy, self_test};

pub mod trace;

#[derive(Debug, Parser)]
#[command(name = "sni-ua")]
#[command(bin_name = "sni-ua")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmds: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Check(check::CliCommandCheck),
    Legacy(legacy::CliCommandLegacy),
    /// run the builtin self test against known user agents
    SelfTest,
}

fn main() {
    let cli = Cli::parse();

    #[allow(clippy::exit)]
    if let Err(err) = trace::init_tracing(LevelFilter::WARN).and_then(|()| match cli.cmds {
        CliCommands::Check(cfg) => check::run(cfg),
        CliCommands::Legacy(cfg) => legacy::run(cfg),
        CliCommands::SelfTest => self_test::run(),
    }) {
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}
