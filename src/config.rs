use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use url::Url;

use crate::twitter::{API_ENDPOINT_BASE, DEFAULT_MAX_RESULTS};

#[derive(Deserialize, Debug)]
pub struct Config {
    /// JSON file holding the `bearer_token`.
    pub(crate) credentials_path: PathBuf,
    /// Directory the `<username>.json` file is written to.
    pub(crate) output_dir: PathBuf,
    /// Twitter API base, defaults to the public v2 endpoint.
    pub(crate) api_base: Option<Url>,
    pub(crate) fetch: FetchConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct FetchConfig {
    pub(crate) username: String,
    pub(crate) max_results: Option<u32>,
    #[serde(default)]
    pub(crate) tweet_fields: Vec<String>,
}

impl Config {
    pub async fn load(path: &Path) -> Result<Self> {
        let buf = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&buf)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Applies command line overrides on top of the file values.
    pub fn override_fetch(
        &mut self,
        username: Option<String>,
        max_results: Option<u32>,
        tweet_fields: Option<Vec<String>>,
    ) {
        if let Some(username) = username {
            self.fetch.username = username;
        }
        if max_results.is_some() {
            self.fetch.max_results = max_results;
        }
        if let Some(tweet_fields) = tweet_fields {
            self.fetch.tweet_fields = tweet_fields;
        }
    }

    pub(crate) fn api_base(&self) -> Result<Url> {
        match &self.api_base {
            Some(api_base) => Ok(api_base.clone()),
            None => Url::parse(API_ENDPOINT_BASE)
                .with_context(|| "Failed to parse Twitter api base endpoint"),
        }
    }

    pub(crate) fn max_results(&self) -> u32 {
        self.fetch.max_results.unwrap_or(DEFAULT_MAX_RESULTS)
    }
}
