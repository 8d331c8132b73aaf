use clap::builder::FalseyValueParser;
use clap::Parser;
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg};

/// Rename archive folders to canonical Pascal_Case titles, keeping date prefixes
#[derive(Parser, Debug)]
#[command(name = "retitle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory whose immediate sub-folders are renamed
    #[arg(long, value_name = "PATH", default_value = ".", env = "RETITLE_PATH")]
    pub path: PathBuf,

    /// Actually perform git mv for each planned rename (default is a dry run)
    #[arg(long)]
    pub apply: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// How to show the planned renames in summary output
    #[arg(long, value_enum, default_value = "list")]
    pub preview: PreviewArg,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,
}
