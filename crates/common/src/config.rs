// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Configuration structures for Minecraft Mod Manager

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

const APP_DIR: &str = "mc-mod-manager";

/// Default location of the Mojang version manifest
pub const DEFAULT_VERSION_MANIFEST_URL: &str =
    "https://launchermeta.mojang.com/mc/game/version_manifest.json";

/// Application configuration, read from `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// One subdirectory per profile
    #[serde(default = "default_profiles_dir")]
    pub profiles_dir: PathBuf,
    /// Icon cache and cached version manifest
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    /// Bundled icons (modloader icons, placeholders)
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// Optional JSON file overriding UI strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_file: Option<PathBuf>,
    #[serde(default = "default_manifest_url")]
    pub version_manifest_url: String,
}

/// Filesystem layout handed to every component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub profiles_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub assets_dir: PathBuf,
}

fn data_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn default_profiles_dir() -> PathBuf {
    data_root().join("profiles")
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn default_assets_dir() -> PathBuf {
    data_root().join("assets").join("icons")
}

fn default_manifest_url() -> String {
    DEFAULT_VERSION_MANIFEST_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profiles_dir: default_profiles_dir(),
            cache_dir: default_cache_dir(),
            assets_dir: default_assets_dir(),
            language_file: None,
            version_manifest_url: default_manifest_url(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join(APP_DIR).join("config.toml"))
    }

    pub fn paths(&self) -> Paths {
        Paths {
            profiles_dir: self.profiles_dir.clone(),
            cache_dir: self.cache_dir.clone(),
            assets_dir: self.assets_dir.clone(),
        }
    }

    /// Create the profiles and cache directories if needed
    pub fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.profiles_dir).context("Failed to create profiles directory")?;
        fs::create_dir_all(&self.cache_dir).context("Failed to create cache directory")?;
        Ok(())
    }
}

impl Paths {
    /// Directory of a single profile
    pub fn profile_dir(&self, name: &str) -> PathBuf {
        self.profiles_dir.join(name)
    }

    /// Cached icon of a managed mod: `<cache>/modIcons/<platform>/<modId>.png`
    pub fn mod_icon_path(&self, platform: crate::types::Platform, mod_id: &str) -> PathBuf {
        self.cache_dir
            .join("modIcons")
            .join(platform.dir_name())
            .join(format!("{}.png", mod_id))
    }

    /// Bundled icon by file stem, e.g. `forge` or `noMedia`
    pub fn asset_icon(&self, stem: &str) -> PathBuf {
        self.assets_dir.join(format!("{}.png", stem))
    }

    pub fn version_manifest_cache(&self) -> PathBuf {
        self.cache_dir.join("version_manifest.json")
    }
}
