use clap::Parser;
use std::path::PathBuf;

use crate::collect::NamePolicy;

const AFTER_HELP: &str = "\
Copies every .py, .html, .css and .js file under FOLDER into ./<FOLDER name>/,
renaming repeated names to name_2.ext, name_3.ext, ..., and writes tree.txt
there describing where each file came from.

Examples:
  aidump ../my-project
  aidump --names compat ~/src/site
  RUST_LOG=debug aidump ./app";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "aidump",
    version,
    about = "Flatten source files into one directory with a tree map",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Source folder to dump
    pub path: PathBuf,

    /// How repeated file names are resolved
    #[arg(long = "names", value_enum, default_value_t = NamePolicy::Unique)]
    pub names: NamePolicy,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the summary line
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }
}
