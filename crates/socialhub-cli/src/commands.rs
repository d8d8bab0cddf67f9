use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::{Config, LOG_FILE, resolve_data_dir};
use crate::handlers::feed::FeedRequest;
use crate::logging::{self, LogSink};
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = Config::path_in(&data_dir);

    // The TUI owns the terminal, so its logs go to a file
    let interactive =
        matches!(cli.command, None | Some(Commands::Tui)) && std::io::stdout().is_terminal();
    let log_path = data_dir.join(LOG_FILE);
    let sink = if interactive {
        LogSink::File(&log_path)
    } else {
        LogSink::Stderr
    };
    logging::init(cli.log_level, sink)?;
    log::debug!("data dir: {}", data_dir.display());

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => handlers::tui::handle(&load_config(&config_path)?, cli.format),

        Commands::Feed { likes, posts, tab } => handlers::feed::handle(
            &load_config(&config_path)?,
            FeedRequest { likes, posts, tab },
            cli.format,
        ),

        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                handlers::config::show(&load_config(&config_path)?, &config_path, cli.format)
            }
            // Init must work even when the existing file is broken
            ConfigCommand::Init { force } => {
                handlers::config::init(&config_path, force, cli.format)
            }
        },
    }
}

fn load_config(path: &Path) -> Result<Config> {
    Config::load_from(path).with_context(|| format!("failed to load {}", path.display()))
}
