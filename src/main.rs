#![forbid(unsafe_code)]

use aidump::cli::Args;
use aidump::dump::Dumper;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("aidump: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_tracing(args.verbose);

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let dumper = Dumper::new(&args.path, &cwd)?.with_policy(args.names);
    let report = dumper
        .run()
        .with_context(|| format!("{}: dump failed", dumper.source().display()))?;

    if !args.quiet {
        println!(
            "copied {} file(s) to {} ({} renamed, {} names)",
            report.copied,
            report.destination.display(),
            report.renamed,
            dumper.policy()
        );
    }
    Ok(())
}

/// Log to stderr. `RUST_LOG` wins; otherwise each `-v` lowers the threshold
/// from `warn`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
