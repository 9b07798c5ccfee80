use crate::{commands::Fetch, Config};
use anyhow::{Context, Result};
use reqwest::Client;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Application entry.
pub struct App {
    client: Client,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .with_context(|| "Failed to build http client")?;
        Ok(Self { client, config })
    }

    /// Fetches the configured user's recent tweets, returning the written file path.
    #[instrument(skip_all)]
    pub async fn fetch(&self) -> Result<PathBuf> {
        info!("Starting to fetch recent tweets from config.");
        Fetch::new(&self.client, &self.config)
            .run()
            .await
            .with_context(|| "Failed to execute fetch command")
    }
}
