use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::{
    client,
    credentials::Credentials,
    twitter::{search_url, tweet_fields_params},
    Config,
};

/// Fetch command entry.
///
/// Loads the bearer token, requests the user's recent tweets once and
/// writes the raw response to `<output_dir>/<username>.json`.
pub(crate) struct Fetch<'a> {
    client: &'a Client,
    config: &'a Config,
}

impl<'a> Fetch<'a> {
    pub(crate) fn new(client: &'a Client, config: &'a Config) -> Self {
        Self { client, config }
    }

    /// Returns the path of the written file.
    pub(crate) async fn run(&self) -> Result<PathBuf> {
        // Credentials are checked before anything goes over the network.
        let credentials = Credentials::load(&self.config.credentials_path).await?;
        let bearer_token = credentials.bearer_token()?;

        let username = self.config.fetch.username.as_str();
        let endpoint = search_url(&self.config.api_base()?, username, self.config.max_results())?;
        let params = tweet_fields_params(self.config.fetch.tweet_fields.as_slice());
        info!("Fetching recent tweets of {}", username);

        let timeline = client::connect(self.client, endpoint, &params, bearer_token).await?;

        let file_path = save(&self.config.output_dir, username, &timeline).await?;
        println!("Data saved in {}", file_path.display());
        Ok(file_path)
    }
}

async fn save(output_dir: &Path, username: &str, timeline: &Value) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create directory {}", output_dir.display()))?;

    let file_path = output_dir.join(format!("{}.json", username));
    debug!("Writing timeline to {}", file_path.display());
    fs::write(&file_path, to_pretty_json(timeline)?)
        .await
        .with_context(|| format!("Failed to write {}", file_path.display()))?;
    Ok(file_path)
}

/// Four space indented JSON. Non-ASCII characters are written as is.
fn to_pretty_json(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .with_context(|| "Failed to serialize timeline to json")?;
    Ok(buf)
}
