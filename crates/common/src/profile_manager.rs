// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Minecraft Mod Manager - Profile Manager Module
// Profile directory I/O shared by the popups and the container

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::ProfileProperties;

/// Name of the descriptor file inside each profile directory
pub const PROPERTIES_FILE: &str = "properties.json";

/// Longest profile name accepted by the name field
pub const MAX_PROFILE_NAME_LEN: usize = 64;

/// Whether `c` may appear in a profile name (letters, digits, `_`, space, `.`, `-`)
pub fn is_valid_profile_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '.' | '-')
}

/// Check a (trimmed) profile name against the allowed character set
pub fn validate_profile_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::ProfileNameEmpty);
    }
    if name.chars().count() > MAX_PROFILE_NAME_LEN
        || !name.chars().all(is_valid_profile_char)
        || is_dot_name(name)
    {
        return Err(Error::ProfileNameInvalid(name.to_string()));
    }
    Ok(())
}

/// `.`, `..` and other dot-only names refer to directories, not siblings
pub(crate) fn is_dot_name(name: &str) -> bool {
    name.chars().all(|c| c == '.')
}

/// Names of every entry in the profiles directory
pub fn list_profile_names(profiles_dir: &Path) -> Result<Vec<String>> {
    if !profiles_dir.exists() {
        debug!("Profiles directory does not exist: {}", profiles_dir.display());
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(profiles_dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Check whether a sibling entry with the given name exists
pub fn profile_name_exists(profiles_dir: &Path, name: &str, exclude: Option<&str>) -> Result<bool> {
    Ok(list_profile_names(profiles_dir)?
        .iter()
        .any(|existing| existing == name && Some(existing.as_str()) != exclude))
}

/// Load a profile descriptor from its directory
pub fn load_profile(profile_dir: &Path) -> Result<ProfileProperties> {
    let contents = fs::read_to_string(profile_dir.join(PROPERTIES_FILE))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load every profile in the profiles directory, sorted by name
pub fn load_all_profiles(profiles_dir: &Path) -> Result<Vec<ProfileProperties>> {
    let mut profiles = Vec::new();

    for name in list_profile_names(profiles_dir)? {
        let path = profiles_dir.join(&name);
        if !path.is_dir() {
            continue;
        }

        match load_profile(&path) {
            Ok(profile) => {
                debug!("Loaded profile: {} ({} {})", profile.name, profile.modloader, profile.version);
                profiles.push(profile);
            }
            Err(e) => {
                warn!("Failed to load profile {}: {}", path.display(), e);
            }
        }
    }

    Ok(profiles)
}

/// Create a new profile directory and its descriptor
///
/// The directory must not exist yet; if another process created it after
/// validation this returns `Error::ProfileExists`.
pub fn create_profile(profiles_dir: &Path, profile: &ProfileProperties) -> Result<PathBuf> {
    fs::create_dir_all(profiles_dir)?;

    let profile_dir = profiles_dir.join(&profile.name);
    if let Err(e) = fs::create_dir(&profile_dir) {
        if e.kind() == io::ErrorKind::AlreadyExists {
            return Err(Error::ProfileExists(profile.name.clone()));
        }
        return Err(e.into());
    }

    write_properties(&profile_dir, profile)?;
    debug!("Created profile '{}' at {}", profile.name, profile_dir.display());

    Ok(profile_dir)
}

/// Rename a profile directory and update the name stored in its descriptor
pub fn rename_profile(profiles_dir: &Path, old_name: &str, new_name: &str) -> Result<PathBuf> {
    let old_dir = profiles_dir.join(old_name);
    if !old_dir.is_dir() {
        return Err(Error::ProfileNotFound(old_name.to_string()));
    }

    let new_dir = profiles_dir.join(new_name);
    if new_dir.exists() {
        return Err(Error::ProfileExists(new_name.to_string()));
    }

    fs::rename(&old_dir, &new_dir)?;

    match load_profile(&new_dir) {
        Ok(mut profile) => {
            profile.name = new_name.to_string();
            write_properties(&new_dir, &profile)?;
        }
        Err(e) => warn!("Renamed profile has no readable descriptor: {}", e),
    }

    debug!("Renamed profile '{}' to '{}'", old_name, new_name);
    Ok(new_dir)
}

/// Delete a profile directory and everything in it
pub fn delete_profile(profiles_dir: &Path, name: &str) -> Result<PathBuf> {
    let profile_dir = profiles_dir.join(name);
    if !profile_dir.is_dir() {
        return Err(Error::ProfileNotFound(name.to_string()));
    }

    fs::remove_dir_all(&profile_dir)?;
    debug!("Deleted profile at {}", profile_dir.display());

    Ok(profile_dir)
}

fn write_properties(profile_dir: &Path, profile: &ProfileProperties) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    profile.serialize(&mut ser)?;

    let mut file = fs::File::create(profile_dir.join(PROPERTIES_FILE))?;
    file.write_all(&buf)?;
    Ok(())
}
