use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fss_core::ParseAs;

#[derive(Debug, Parser)]
#[command(name = "fss-browse", author, version, about = "Browse a file system server from the terminal")]
pub struct Cli {
    /// Configuration file (default: $XDG_CONFIG_HOME/fss/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Plugin page to issue requests against, e.g. http://localhost:8080/fss/browser/
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the listing page of a directory
    List {
        /// Directory to list (default: the server's current directory)
        #[arg(long)]
        cwd: Option<String>,
        /// Write the page here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Render the listing page with the plugin menu open
    Menu {
        #[arg(long)]
        cwd: Option<String>,
        /// Open the menu of this entry (0-based)
        #[arg(long, conflicts_with = "header", required_unless_present = "header")]
        entry: Option<usize>,
        /// Open the menu of the listed directory itself
        #[arg(long)]
        header: bool,
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print the content of a path
    Download {
        path: String,
        /// Parse as json or text (default: by extension)
        #[arg(long = "as", value_parser = parse_mode)]
        parse_as: Option<ParseAs>,
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print the content of the current listing's root
    Data {
        #[arg(long = "as", value_parser = parse_mode)]
        parse_as: Option<ParseAs>,
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn parse_mode(value: &str) -> Result<ParseAs, String> {
    value.parse().map_err(|err: fss_core::RenderError| err.to_string())
}
