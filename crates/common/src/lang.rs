// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! User-facing strings

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

const ENGLISH: &[(&str, &str)] = &[
    ("addProfile", "Add profile"),
    ("profileName", "Profile name"),
    ("profileNameHere", "Profile name here"),
    ("mcVersion", "Minecraft version"),
    ("onlyShowReleases", "Only show releases"),
    ("modloader", "Mod loader"),
    ("cancel", "Cancel"),
    ("create", "Create"),
    ("close", "Close"),
    ("yes", "Yes"),
    ("no", "No"),
    ("ok", "OK"),
    ("error", "Error"),
    ("success", "Success"),
    ("rename", "Rename"),
    ("remove", "Remove"),
    ("newName", "New name"),
    ("configureProfile", "Configure profile"),
    ("removeProfile", "Remove profile"),
    ("removeProfileConfirm", "Are you sure you want to remove this profile?"),
    ("profileCreationSuccess", "The profile was created successfully"),
    ("profileNameEmptyError", "The profile name cannot be empty"),
    ("profileNameExistsError", "A profile with this name already exists"),
    ("profileNameInvalidError", "The profile name may only contain letters, digits, spaces, '_', '.' and '-'"),
    ("profileNotFoundError", "This profile no longer exists"),
    ("noVersionSelectedError", "Please select a Minecraft version"),
    ("versionListError", "The Minecraft version list could not be loaded"),
    ("removeMod", "Remove mod"),
    ("removeModConfirm", "Are you sure you want to remove this mod?"),
    ("modRemoved", "The mod was removed"),
    ("renameMod", "Rename mod"),
    ("modRenamed", "The mod was renamed"),
    ("modNameEmptyError", "The mod name cannot be empty"),
    ("modNameInvalidError", "The mod name cannot contain '/' or '\\' or consist only of dots"),
    ("modNameExistsError", "A mod with this name already exists"),
    ("profiles", "Profiles"),
    ("mods", "Mods"),
    ("noProfiles", "No profiles yet"),
    ("noProfilesHint", "Create a profile to get started"),
    ("noMods", "No mods installed"),
    ("by", "by"),
    ("unexpectedError", "Something went wrong"),
];

/// Localized strings with built-in English fallbacks
#[derive(Debug, Clone)]
pub struct Lang {
    strings: HashMap<String, String>,
}

impl Default for Lang {
    fn default() -> Self {
        Self {
            strings: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Lang {
    /// English strings overlaid with the entries of a JSON language file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read language file {}", path.display()))?;
        let overrides: HashMap<String, String> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse language file {}", path.display()))?;

        debug!("Loaded {} strings from {}", overrides.len(), path.display());

        let mut lang = Self::default();
        lang.strings.extend(overrides);
        Ok(lang)
    }

    /// Look up a string; unknown keys come back unchanged
    pub fn get(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
