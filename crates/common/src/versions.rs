// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Minecraft version listing backed by the Mojang version manifest

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Source of the Minecraft versions offered when creating a profile
pub trait McVersionLister {
    /// Version ids, newest first
    fn list_mc_versions(&self, only_releases: bool) -> Result<Vec<String>>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestVersion {
    pub id: String,
    #[serde(rename = "type")]
    pub version_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionManifest {
    pub versions: Vec<ManifestVersion>,
}

impl VersionManifest {
    /// Download the manifest
    pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<Self> {
        debug!("Fetching version manifest from {}", url);
        let manifest = client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Self>()
            .await?;
        Ok(manifest)
    }

    /// Download the manifest and refresh the cache, or fall back to the cached copy
    pub async fn fetch_or_cached(client: &reqwest::Client, url: &str, cache: &Path) -> Result<Self> {
        match Self::fetch(client, url).await {
            Ok(manifest) => {
                if let Err(e) = manifest.save_cache(cache).await {
                    warn!("Failed to cache version manifest: {}", e);
                }
                Ok(manifest)
            }
            Err(e) => {
                warn!("Version manifest download failed, using cache: {}", e);
                Self::load_cache(cache)
                    .await
                    .map_err(|cache_err| Error::VersionList(format!("{}; {}", e, cache_err)))
            }
        }
    }

    pub async fn load_cache(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub async fn save_cache(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, serde_json::to_vec(self)?).await?;
        Ok(())
    }
}

impl McVersionLister for VersionManifest {
    fn list_mc_versions(&self, only_releases: bool) -> Result<Vec<String>> {
        if self.versions.is_empty() {
            return Err(Error::VersionList("version manifest is empty".to_string()));
        }
        Ok(self
            .versions
            .iter()
            .filter(|v| !only_releases || v.version_type == "release")
            .map(|v| v.id.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> VersionManifest {
        serde_json::from_str(
            r#"{"latest": {"release": "1.20.1"}, "versions": [
                {"id": "23w31a", "type": "snapshot", "url": "u"},
                {"id": "1.20.1", "type": "release", "url": "u"},
                {"id": "1.20", "type": "release", "url": "u"},
                {"id": "b1.7.3", "type": "old_beta", "url": "u"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_only_releases() {
        assert_eq!(manifest().list_mc_versions(true).unwrap(), vec!["1.20.1", "1.20"]);
    }

    #[test]
    fn test_all_versions_keep_order() {
        assert_eq!(
            manifest().list_mc_versions(false).unwrap(),
            vec!["23w31a", "1.20.1", "1.20", "b1.7.3"]
        );
    }

    #[test]
    fn test_empty_manifest_is_an_error() {
        assert!(VersionManifest::default().list_mc_versions(true).is_err());
    }

    #[tokio::test]
    async fn test_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache").join("version_manifest.json");

        manifest().save_cache(&path).await.unwrap();
        assert_eq!(VersionManifest::load_cache(&path).await.unwrap(), manifest());
    }
}
