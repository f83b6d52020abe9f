//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for facts_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => facts_domain::OutputFormat::Text,
            OutputFormat::Json => facts_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for number-facts
#[derive(Parser, Debug)]
#[command(name = "number-facts")]
#[command(author, version, about = "Interesting facts about numbers")]
#[command(long_about = r#"
Number Facts looks up trivia, math and date facts about a number.

Sources are consulted in priority order (remote text API, remote JSON API,
built-in table) until one answers. By default a total failure is masked with
a generic fact; pass --strict to see the error instead.

Configuration files are loaded from (in priority order):
1. NUMBER_FACTS_* environment variables
2. --config <path>                           Explicit config file
3. ./number-facts.toml                       Project-level config
4. ~/.config/number-facts/config.toml        Global config

Example:
  number-facts fact 42
  number-facts fact 7 -c math --save
  number-facts random -c date --strict
  number-facts history list
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a fact about a number
    Fact {
        /// The number (digits only)
        number: Option<String>,

        #[command(flatten)]
        lookup: LookupArgs,

        /// Also add the fact to favorites
        #[arg(long)]
        save: bool,
    },

    /// Look up a fact about a number chosen by the source
    Random {
        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// List facts for a whole category
    Category {
        /// Fact category: trivia, math or date
        #[arg(default_value = "trivia")]
        category: String,
    },

    /// List the sources that are currently reachable
    Providers,

    /// Manage favorite facts
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Manage lookup history
    #[command(subcommand)]
    History(HistoryCommand),
}

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Fact category: trivia, math or date
    #[arg(short, long, default_value = "trivia")]
    pub category: String,

    /// Report errors instead of substituting a generic fact
    #[arg(long)]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// Show saved favorites
    List,
    /// Look up a fact and save it
    Add {
        number: Option<String>,
        /// Fact category: trivia, math or date
        #[arg(short, long, default_value = "trivia")]
        category: String,
    },
    /// Remove a favorite by id
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// Show recent lookups, newest first
    List,
    /// Remove one entry by id
    Remove { id: String },
    /// Forget all lookups
    Clear,
}
