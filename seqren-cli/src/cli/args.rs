use clap::Parser;
use std::path::PathBuf;

use super::types::{ChainArg, OutputFormat, PreviewArg};

/// Rename files in sequence: <name><zero-padded number><original extension>
#[derive(Parser, Debug)]
#[command(name = "seqren")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base name for the renamed files (asked for when omitted)
    pub name: Option<String>,

    /// Path of target directory
    #[arg(short = 'p', long = "path", value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// N-digit 0 filling (defaults from config, else 3)
    #[arg(short = 's', long = "seq", value_name = "N", allow_negative_numbers = true)]
    pub seq: Option<i64>,

    /// Display lines of renaming target (defaults from config, else 10)
    #[arg(short = 'n', long = "num", value_name = "N")]
    pub num: Option<usize>,

    /// Execute command without confirmation
    #[arg(short = 'f', long = "force", env = "SEQREN_FORCE")]
    pub force: bool,

    /// Display all lines of renaming target
    #[arg(short = 'a', long = "all-show")]
    pub all_show: bool,

    /// Show the preview and exit without renaming
    #[arg(long)]
    pub dry_run: bool,

    /// Preview output format (defaults from config if not specified)
    #[arg(long, value_enum)]
    pub preview: Option<PreviewArg>,

    /// How far to follow renames into names that are still occupied
    #[arg(long, value_enum)]
    pub chain: Option<ChainArg>,

    /// Output format for machine consumption
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}
