// CLI module for invoicelens

use clap::Parser;
use std::path::PathBuf;

/// invoicelens - Multilanguage invoice extractor bridging a web form to Gemini
#[derive(Parser, Debug)]
#[command(name = "invoicelens", version, about, long_about = None)]
pub struct Args {
    /// Path to a config file (default: ~/.invoicelens/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ping the Gemini API once, print the round-trip latency, and exit
    #[arg(long)]
    pub check: bool,
}
