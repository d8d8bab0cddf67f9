use anyhow::{Result, bail};
use std::path::Path;

use crate::config::Config;
use crate::presentation::view_models::ConfigViewModel;
use crate::presentation::{
    CommandResultViewModel, ConsoleRenderer, Guidance, Renderer, StatusBadge,
};
use crate::types::OutputFormat;

pub fn show(config: &Config, path: &Path, format: OutputFormat) -> Result<()> {
    let exists = path.exists();
    let vm = ConfigViewModel {
        path: path.to_path_buf(),
        exists,
        config: config.clone(),
    };

    let mut result = CommandResultViewModel::new(vm);
    if !exists {
        result = result.with_suggestion(
            Guidance::new("Write the defaults to disk").with_command("socialhub config init"),
        );
    }

    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}

pub fn init(path: &Path, force: bool, format: OutputFormat) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let config = Config::default();
    config.save_to(path)?;
    log::info!("wrote default config to {}", path.display());

    let vm = ConfigViewModel {
        path: path.to_path_buf(),
        exists: true,
        config,
    };
    let result =
        CommandResultViewModel::new(vm).with_badge(StatusBadge::success("Config written"));

    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}
