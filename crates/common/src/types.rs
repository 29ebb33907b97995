// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Common types for Minecraft Mod Manager

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

/// Runtime mod-loading framework selected per profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ModLoader {
    Fabric,
    Forge,
    NeoForge,
    Quilt,
}

impl ModLoader {
    /// All loaders, in the order they are offered to the user
    pub const ALL: [ModLoader; 4] = [
        ModLoader::Fabric,
        ModLoader::Forge,
        ModLoader::NeoForge,
        ModLoader::Quilt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModLoader::Fabric => "Fabric",
            ModLoader::Forge => "Forge",
            ModLoader::NeoForge => "NeoForge",
            ModLoader::Quilt => "Quilt",
        }
    }

    /// File stem of the loader icon in the assets directory
    pub fn icon_stem(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for ModLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModLoader {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModLoader::ALL
            .into_iter()
            .find(|loader| loader.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownModLoader(s.to_string()))
    }
}

/// Profile descriptor, persisted as `properties.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileProperties {
    pub name: String,
    /// Minecraft version
    pub version: String,
    pub modloader: ModLoader,
}

/// Platform a managed mod was downloaded from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Platform {
    #[serde(alias = "modrinth")]
    Modrinth,
    #[serde(alias = "curseforge")]
    CurseForge,
}

impl Platform {
    /// Directory name used for this platform in the icon cache
    pub fn dir_name(&self) -> &'static str {
        match self {
            Platform::Modrinth => "modrinth",
            Platform::CurseForge => "curseforge",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Modrinth => f.write_str("Modrinth"),
            Platform::CurseForge => f.write_str("CurseForge"),
        }
    }
}

/// A mod installed through the manager, with platform metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManagedMod {
    pub mod_id: String,
    pub mod_name: String,
    pub file_name: String,
    #[serde(default)]
    pub version_name: String,
    #[serde(default)]
    pub version_id: String,
    pub platform: Platform,
}

/// A bare jar dropped into the mods folder by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomMod {
    pub file_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstalledMod {
    Managed(ManagedMod),
    Custom(CustomMod),
}

impl InstalledMod {
    pub fn is_custom(&self) -> bool {
        matches!(self, InstalledMod::Custom(_))
    }

    pub fn file_name(&self) -> &str {
        match self {
            InstalledMod::Managed(m) => &m.file_name,
            InstalledMod::Custom(c) => &c.file_name,
        }
    }

    /// Name shown in lists: the mod name, or the file name for custom jars
    pub fn display_name(&self) -> &str {
        match self {
            InstalledMod::Managed(m) => &m.mod_name,
            InstalledMod::Custom(c) => &c.file_name,
        }
    }
}

/// A mod returned by the search backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResultMod {
    pub id: String,
    pub name: String,
    pub author: String,
    /// Local path of the cached icon
    pub icon: PathBuf,
    pub platform: Platform,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Release,
    Beta,
    Alpha,
}

impl ReleaseType {
    pub const ALL: [ReleaseType; 3] = [ReleaseType::Release, ReleaseType::Beta, ReleaseType::Alpha];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Release => "release",
            ReleaseType::Beta => "beta",
            ReleaseType::Alpha => "alpha",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties of a single mod version as provided by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionProperties {
    pub release_type: ReleaseType,
    /// Compatible Minecraft versions
    #[serde(default)]
    pub mc_versions: Vec<String>,
    /// Backend-specific fields (download url, hashes, ...) passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl VersionProperties {
    pub fn new(release_type: ReleaseType, mc_versions: &[&str]) -> Self {
        Self {
            release_type,
            mc_versions: mc_versions.iter().map(|v| v.to_string()).collect(),
            extra: BTreeMap::new(),
        }
    }

    pub fn supports(&self, game_version: &str) -> bool {
        self.mc_versions.iter().any(|v| v == game_version)
    }
}

/// A version key with its properties; lists of these keep backend order
pub type VersionEntry = (String, VersionProperties);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modloader_parse() {
        assert_eq!("forge".parse::<ModLoader>().unwrap(), ModLoader::Forge);
        assert_eq!("NeoForge".parse::<ModLoader>().unwrap(), ModLoader::NeoForge);
        assert!("rift".parse::<ModLoader>().is_err());
    }

    #[test]
    fn test_managed_mod_camel_case() {
        let json = r#"{
            "modId": "AANobbMI",
            "modName": "Sodium",
            "fileName": "sodium-0.5.8.jar",
            "versionName": "0.5.8",
            "versionId": "abc",
            "platform": "Modrinth"
        }"#;
        let m: ManagedMod = serde_json::from_str(json).unwrap();
        assert_eq!(m.mod_name, "Sodium");
        assert_eq!(m.platform.dir_name(), "modrinth");
    }

    #[test]
    fn test_version_properties_keep_extra_fields() {
        let json = r#"{"releaseType": "beta", "mcVersions": ["1.20.1"], "url": "https://x"}"#;
        let props: VersionProperties = serde_json::from_str(json).unwrap();
        assert_eq!(props.release_type, ReleaseType::Beta);
        assert!(props.supports("1.20.1"));
        assert_eq!(props.extra["url"], "https://x");
    }
}
