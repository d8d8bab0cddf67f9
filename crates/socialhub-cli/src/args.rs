use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use socialhub_types::NavTab;

#[derive(Parser)]
#[command(name = "socialhub")]
#[command(about = "Browse, like and publish posts on a seeded social feed page", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Directory holding config.toml and socialhub.log [env: SOCIALHUB_PATH]"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive feed page (default)
    Tui,

    /// Print the feed page after applying the given actions
    Feed {
        #[arg(
            long = "like",
            value_name = "POST_ID",
            help = "Toggle the like on a post (repeatable)"
        )]
        likes: Vec<u64>,

        #[arg(
            long = "post",
            value_name = "TEXT",
            help = "Publish a post from the composer (repeatable)"
        )]
        posts: Vec<String>,

        #[arg(long, value_name = "TAB", help = "Select a navigation tab")]
        tab: Option<NavTab>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config.toml
    Init {
        #[arg(long, help = "Overwrite an existing config.toml")]
        force: bool,
    },
}
