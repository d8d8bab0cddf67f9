use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::CommandResultViewModel;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Render into any writer; `render` targets stdout
    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content)?;

        if !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\n💡 Tips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}
