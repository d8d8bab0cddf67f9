use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

use crate::types::LogLevel;

/// Where log lines go
pub enum LogSink<'a> {
    Stderr,
    /// Append to a file; used while the TUI owns the terminal
    File(&'a Path),
}

/// Initialise the global logger. `RUST_LOG` takes precedence over `level`.
///
/// Calling this more than once keeps the first logger.
pub fn init(level: LogLevel, sink: LogSink<'_>) -> anyhow::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.to_string()));
    builder.format_timestamp_millis();

    match sink {
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
    }

    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_receives_records() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join(crate::config::LOG_FILE);

        init(LogLevel::Info, LogSink::File(&path))?;
        log::warn!("file sink marker");

        let written = std::fs::read_to_string(&path)?;
        assert!(written.contains("file sink marker"));
        Ok(())
    }
}
