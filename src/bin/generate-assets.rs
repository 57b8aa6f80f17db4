#![forbid(unsafe_code)]
//! Writes shell completions and the `aidump.1` man page for packaging.

use aidump::cli::Args;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::path::{Path, PathBuf};

const BIN_NAME: &str = "aidump";

#[derive(Parser, Debug)]
#[command(name = "generate-assets", about = "Generate aidump completions and man page")]
struct AssetArgs {
    /// Output directory
    #[arg(default_value = "dist")]
    out_dir: PathBuf,

    /// Shells to generate completions for (repeatable; default: bash, zsh, fish)
    #[arg(short = 's', long = "shell", value_enum)]
    shells: Vec<Shell>,
}

fn main() -> Result<()> {
    let args = AssetArgs::parse();
    let shells = if args.shells.is_empty() {
        vec![Shell::Bash, Shell::Zsh, Shell::Fish]
    } else {
        args.shells
    };

    let completions = write_completions(&args.out_dir.join("completions"), &shells)?;
    let man_page = write_man_page(&args.out_dir.join("man"))?;

    for path in completions.iter().chain(std::iter::once(&man_page)) {
        println!("{}", path.display());
    }
    Ok(())
}

fn write_completions(dir: &Path, shells: &[Shell]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    shells
        .iter()
        .map(|shell| {
            let mut cmd = Args::command();
            generate_to(*shell, &mut cmd, BIN_NAME, dir)
                .with_context(|| format!("{shell} completions"))
        })
        .collect()
}

fn write_man_page(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    let path = dir.join(format!("{BIN_NAME}.1"));
    fs::write(&path, buffer).with_context(|| format!("{}: cannot write", path.display()))?;
    Ok(path)
}
