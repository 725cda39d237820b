mod app;
mod commands;
mod output;

use anyhow::Context;
use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .context("failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    if !cli.global.json {
        init_logging(cli.global.verbose);
    }

    match &cli.command {
        Command::Info { path, from } => commands::info::run(path, *from, &cli.global),
        Command::Order { path, from } => commands::order::run(path, *from, &cli.global),
        Command::Scc {
            path,
            from,
            members,
        } => commands::scc::run(path, *from, *members, &cli.global),
        Command::Convert {
            input,
            output,
            from,
            to,
        } => commands::convert::run(input, output, *from, *to),
    }
}

/// Route library and CLI logs to stderr, keeping stdout for reports.
///
/// Reader warnings about dropped vertex labels show at the default level;
/// `--verbose` adds traversal and reader summaries. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("digraphs", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}
