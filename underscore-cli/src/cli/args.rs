use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Batch rename files from mixed case to underscore case
#[derive(Parser, Debug)]
#[command(name = "underscore")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  underscore file1.jpg file2.png directory1 directory2 --verbose")]
pub struct Cli {
    /// Files and directories to rename (directories are processed recursively)
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Replace unsupported characters (transliterating Cyrillic) instead of reporting them
    #[arg(short, long)]
    pub force: bool,

    /// Show status only, do not rename files
    #[arg(short, long)]
    pub status: bool,

    /// Verbose messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Wait for ENTER before exiting
    #[arg(long)]
    pub wait: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Read defaults from this config file instead of .underscore/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(
        long,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(flatten)]
    pub case: CaseArgs,
}

/// Override filesystem case-sensitivity detection
#[derive(Args, Debug, Clone)]
pub struct CaseArgs {
    /// Treat the filesystem as case-sensitive
    #[arg(long, conflicts_with = "case_insensitive")]
    pub case_sensitive: bool,

    /// Treat the filesystem as case-insensitive
    #[arg(long)]
    pub case_insensitive: bool,
}

impl CaseArgs {
    pub fn override_value(&self) -> Option<bool> {
        if self.case_insensitive {
            Some(true)
        } else if self.case_sensitive {
            Some(false)
        } else {
            None
        }
    }
}
