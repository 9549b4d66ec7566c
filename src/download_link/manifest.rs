use super::types::*;
use anyhow::{Context, Result};
use reqwest::Client;

pub struct ManifestClient {
    client: Client,
    url: String,
}

impl ManifestClient {
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("devtools-patcher/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, url: url.to_string() })
    }

    pub async fn fetch_manifest(&self) -> Result<Manifest> {
        tracing::info!("Fetching download manifest from {}", self.url);
        let resp = self.client.get(&self.url).send().await?.error_for_status()?;
        let manifest: Manifest = resp
            .json()
            .await
            .context("Download manifest is not a JSON array of records")?;
        tracing::info!("Fetched {} manifest entries", manifest.len());
        Ok(manifest)
    }

    pub async fn fetch_download_url(&self, release: &str, platform: &str) -> Result<Option<String>> {
        let manifest = self.fetch_manifest().await?;
        Ok(find_download_url(&manifest, release, platform).map(str::to_string))
    }
}

pub fn parse_manifest(body: &str) -> Result<Manifest> {
    serde_json::from_str(body).context("Download manifest is not a JSON array of records")
}

/// Incomplete records never match.
pub fn find_download_url<'a>(manifest: &'a [ManifestEntry], release: &str, platform: &str) -> Option<&'a str> {
    manifest.iter().find_map(|entry| match (&entry.release, &entry.platform, &entry.url) {
        (Some(r), Some(p), Some(url)) if r == release && p == platform => Some(url.as_str()),
        _ => None,
    })
}
