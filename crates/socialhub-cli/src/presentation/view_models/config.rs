use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub exists: bool,
    pub config: Config,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = if self.exists { "" } else { " (not created, defaults)" };
        writeln!(f, "Config: {}{}", self.path.display(), origin)?;
        writeln!(f)?;
        writeln!(f, "[viewer]")?;
        writeln!(f, "  name    {}", self.config.viewer.name)?;
        writeln!(f, "  handle  {}", self.config.viewer.handle)?;
        writeln!(f, "  avatar  {}", self.config.viewer.avatar)?;
        writeln!(f, "[ui]")?;
        writeln!(f, "  tick_rate_ms    {}", self.config.ui.tick_rate_ms)?;
        writeln!(f, "  show_sidebar    {}", self.config.ui.show_sidebar)?;
        writeln!(f, "  show_discovery  {}", self.config.ui.show_discovery)
    }
}
