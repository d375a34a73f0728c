use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use crate::config::Config;
use crate::tui;

/// rickdex - browse Rick and Morty characters from your terminal
#[derive(Parser)]
#[command(
    name = "rickdex",
    version,
    about = "Browse Rick and Morty characters from your terminal",
    long_about = r#"rickdex fetches characters from the Rick and Morty API one page at a
time and renders them as cards, with previous/next navigation and an
in-memory cache so revisited pages never hit the network again.

Examples:
  rickdex                         # Start at page 1
  rickdex --page 3                # Start at page 3
  rickdex --base-url http://localhost:8080/api   # Point at another API"#
)]
pub struct Cli {
    /// Base URL of the character API
    #[arg(short = 'u', long = "base-url")]
    pub base_url: Option<String>,

    /// Page to load on startup
    #[arg(short = 'p', long = "page")]
    pub page: Option<u32>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        // Defaults, then environment, then flags
        let mut config = Config::load();
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(page) = self.page {
            config.start_page = page;
        }

        config.validate()?;
        debug!("Configuration initialized");

        info!("Starting character browser at page {}", config.start_page);
        tui::run(config).await?;

        info!("Application finished");
        Ok(())
    }
}
