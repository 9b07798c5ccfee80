use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// API keys read from a local JSON file. Keys other than `bearer_token` are ignored.
#[derive(Deserialize, Debug)]
pub(crate) struct Credentials {
    bearer_token: Option<String>,
}

impl Credentials {
    pub(crate) async fn load(path: &Path) -> Result<Self> {
        let buf = fs::read(path)
            .await
            .with_context(|| format!("Failed to read credentials file {}", path.display()))?;
        serde_json::from_slice(&buf)
            .with_context(|| format!("Failed to parse credentials file {}", path.display()))
    }

    /// Fails when the file has no `bearer_token` entry.
    pub(crate) fn bearer_token(&self) -> Result<&str> {
        self.bearer_token
            .as_deref()
            .ok_or_else(|| anyhow!("Empty bearer_token in credentials file"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::tempdir;

    use super::Credentials;

    #[tokio::test]
    async fn load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys.json");
        fs::write(
            &path,
            r#"{"api_key": "k", "api_secret": "s", "bearer_token": "T"}"#,
        )
        .unwrap();

        let credentials = Credentials::load(&path).await.unwrap();
        assert_eq!("T", credentials.bearer_token().unwrap());
    }

    #[tokio::test]
    async fn missing_bearer_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys.json");
        fs::write(&path, r#"{"api_key": "k"}"#).unwrap();

        let credentials = Credentials::load(&path).await.unwrap();
        assert!(credentials.bearer_token().is_err());
    }

    #[tokio::test]
    async fn missing_file() {
        let dir = tempdir().unwrap();
        let err = Credentials::load(&dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }

    #[tokio::test]
    async fn malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys.json");
        fs::write(&path, "bearer_token = T").unwrap();

        assert!(Credentials::load(&path).await.is_err());
    }
}
