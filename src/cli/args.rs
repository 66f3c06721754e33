//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// News and Video sitemap generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: newsmap.toml)
    #[arg(short = 'C', long, global = true, default_value = "newsmap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the sitemap index and every page of every source
    #[command(visible_alias = "b")]
    Build {
        /// Output directory (overrides [build].output)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,

        /// Collapse XML whitespace (overrides [build].minify)
        #[arg(long)]
        minify: bool,
    },

    /// Print the sitemap index
    #[command(visible_alias = "i")]
    Index,

    /// Print one page of one source
    #[command(visible_alias = "r")]
    Render {
        /// Registered source name
        name: String,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print resolved entries as JSON instead of XML
        #[arg(long)]
        json: bool,
    },
}
