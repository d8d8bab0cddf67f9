use anyhow::Result;
use is_terminal::IsTerminal;
use socialhub_engine::FeedPage;

use crate::config::Config;
use crate::handlers::feed::{self, FeedRequest};
use crate::presentation::TuiRenderer;
use crate::types::OutputFormat;

pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        log::info!("stdout is not a terminal, printing the feed instead");
        return feed::handle(config, FeedRequest::default(), format);
    }

    let page = FeedPage::seeded(config.viewer.to_author());
    log::info!("opening feed page with {} posts", page.feed().len());

    let page = TuiRenderer::new(page, config.ui.clone()).run()?;
    log::info!("session ended with {} posts", page.feed().len());

    Ok(())
}
