// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Installed mod discovery and custom jar file operations

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::profile_manager::is_dot_name;
use crate::types::{CustomMod, InstalledMod, ManagedMod};

/// Mods folder inside a profile directory
pub const MODS_DIR: &str = "mods";

/// Metadata of managed mods inside a profile directory
pub const MANAGED_MODS_FILE: &str = "mods.json";

/// Load managed mod metadata; a missing file means no managed mods
pub fn load_managed_mods(profile_dir: &Path) -> Result<Vec<ManagedMod>> {
    let path = profile_dir.join(MANAGED_MODS_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// List the jars of a profile, matching them against the managed mod metadata
pub fn load_installed_mods(profile_dir: &Path) -> Result<Vec<InstalledMod>> {
    let mods_dir = profile_dir.join(MODS_DIR);
    if !mods_dir.exists() {
        debug!("Mods directory does not exist: {}", mods_dir.display());
        return Ok(Vec::new());
    }

    let mut managed: HashMap<String, ManagedMod> = match load_managed_mods(profile_dir) {
        Ok(mods) => mods.into_iter().map(|m| (m.file_name.clone(), m)).collect(),
        Err(e) => {
            warn!("Ignoring unreadable {}: {}", MANAGED_MODS_FILE, e);
            HashMap::new()
        }
    };

    let mut mods = Vec::new();
    for entry in fs::read_dir(&mods_dir)? {
        let path = entry?.path();
        let is_jar = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"));
        if !path.is_file() || !is_jar {
            continue;
        }
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        match managed.remove(&file_name) {
            Some(m) => mods.push(InstalledMod::Managed(m)),
            None => mods.push(InstalledMod::Custom(CustomMod { file_name, path })),
        }
    }

    mods.sort_by_key(|m| m.display_name().to_lowercase());
    Ok(mods)
}

/// Delete a custom mod file
pub fn remove_mod_file(path: &Path) -> Result<()> {
    fs::remove_file(path)?;
    debug!("Removed mod file {}", path.display());
    Ok(())
}

/// Target path for renaming `path` to `new_name`, keeping the original extension
pub fn renamed_mod_path(path: &Path, new_name: &str) -> PathBuf {
    let file_name = match path.extension() {
        Some(ext) => format!("{}.{}", new_name, ext.to_string_lossy()),
        None => new_name.to_string(),
    };
    path.with_file_name(file_name)
}

/// Check that `new_name` names a file next to the original one
pub fn validate_mod_name(new_name: &str) -> Result<()> {
    if new_name.is_empty() {
        return Err(Error::ModNameEmpty);
    }
    if new_name.contains(['/', '\\']) || is_dot_name(new_name) {
        return Err(Error::ModNameInvalid(new_name.to_string()));
    }
    Ok(())
}

/// Rename a custom mod file, refusing empty names, paths and collisions
pub fn rename_mod_file(path: &Path, new_name: &str) -> Result<PathBuf> {
    validate_mod_name(new_name)?;

    let target = renamed_mod_path(path, new_name);
    if target.exists() {
        return Err(Error::ModExists(target.display().to_string()));
    }

    fs::rename(path, &target)?;
    debug!("Renamed mod file {} to {}", path.display(), target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Platform;

    #[test]
    fn test_rename_keeps_extension() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.jar");
        fs::write(&old, "jar").unwrap();

        let new = rename_mod_file(&old, "renamed").unwrap();
        assert_eq!(new, dir.path().join("renamed.jar"));
        assert!(new.exists());
        assert!(!old.exists());
    }

    #[test]
    fn test_rename_collision_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.jar");
        fs::write(&old, "old").unwrap();
        fs::write(dir.path().join("new.jar"), "new").unwrap();

        assert!(matches!(rename_mod_file(&old, "new"), Err(Error::ModExists(_))));
        assert!(old.exists());
        assert_eq!(fs::read_to_string(dir.path().join("new.jar")).unwrap(), "new");
    }

    #[test]
    fn test_rename_empty_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.jar");
        fs::write(&old, "old").unwrap();

        assert!(matches!(rename_mod_file(&old, ""), Err(Error::ModNameEmpty)));
    }

    #[test]
    fn test_rename_stays_in_mods_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mods_dir = dir.path().join(MODS_DIR);
        fs::create_dir(&mods_dir).unwrap();
        let old = mods_dir.join("old.jar");
        fs::write(&old, "old").unwrap();

        for name in ["../escaped", "sub/dir", "a\\b", ".", ".."] {
            assert!(
                matches!(rename_mod_file(&old, name), Err(Error::ModNameInvalid(_))),
                "{name}"
            );
        }
        assert!(old.exists());
        assert!(!dir.path().join("escaped.jar").exists());
        assert_eq!(rename_mod_file(&old, "v1.2").unwrap(), mods_dir.join("v1.2.jar"));
    }

    #[test]
    fn test_jar_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let mods_dir = dir.path().join(MODS_DIR);
        fs::create_dir(&mods_dir).unwrap();
        fs::write(mods_dir.join("Loud.JAR"), "").unwrap();
        fs::write(mods_dir.join("quiet.jar"), "").unwrap();

        let mods = load_installed_mods(dir.path()).unwrap();
        let names: Vec<_> = mods.iter().map(|m| m.display_name()).collect();
        assert_eq!(names, vec!["Loud.JAR", "quiet.jar"]);
    }

    #[test]
    fn test_load_installed_mods_splits_managed_and_custom() {
        let dir = tempfile::tempdir().unwrap();
        let mods_dir = dir.path().join(MODS_DIR);
        fs::create_dir(&mods_dir).unwrap();
        fs::write(mods_dir.join("sodium.jar"), "").unwrap();
        fs::write(mods_dir.join("mine.jar"), "").unwrap();
        fs::write(mods_dir.join("notes.txt"), "").unwrap();
        let managed = vec![ManagedMod {
            mod_id: "AANobbMI".to_string(),
            mod_name: "Sodium".to_string(),
            file_name: "sodium.jar".to_string(),
            version_name: "0.5.8".to_string(),
            version_id: "v1".to_string(),
            platform: Platform::Modrinth,
        }];
        fs::write(
            dir.path().join(MANAGED_MODS_FILE),
            serde_json::to_string(&managed).unwrap(),
        )
        .unwrap();

        let mods = load_installed_mods(dir.path()).unwrap();
        assert_eq!(mods.len(), 2);
        assert_eq!(mods[0].display_name(), "mine.jar");
        assert!(mods[0].is_custom());
        assert_eq!(mods[1], InstalledMod::Managed(managed[0].clone()));
    }

    #[test]
    fn test_load_installed_mods_without_mods_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_installed_mods(dir.path()).unwrap().is_empty());
    }
}
