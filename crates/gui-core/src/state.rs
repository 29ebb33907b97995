// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! Framework-agnostic application state

use modman_common::{
    delete_profile, load_all_profiles, load_installed_mods, rename_profile, InstalledMod, Paths,
    ProfileProperties, Result,
};
use tracing::{debug, info};

use crate::popups::ProfileRename;

/// Core application state (framework-agnostic)
///
/// Holds the data behind the profile and mod lists. Widgets are kept by the
/// toolkit layer.
#[derive(Debug)]
pub struct AppCore {
    paths: Paths,

    /// All loaded profiles, sorted by name
    pub profiles: Vec<ProfileProperties>,

    /// Name of the profile whose mods are shown
    pub selected_profile: Option<String>,

    /// Mods of the selected profile
    pub installed_mods: Vec<InstalledMod>,
}

impl AppCore {
    pub fn new(paths: Paths) -> Self {
        Self {
            paths,
            profiles: Vec::new(),
            selected_profile: None,
            installed_mods: Vec::new(),
        }
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    /// Load profiles from disk
    ///
    /// The selection is dropped if its profile disappeared.
    pub fn load_profiles(&mut self) -> Result<()> {
        self.profiles = load_all_profiles(&self.paths.profiles_dir)?;
        debug!("Loaded {} profiles", self.profiles.len());

        if let Some(selected) = &self.selected_profile {
            if self.get_profile(selected).is_none() {
                self.selected_profile = None;
                self.installed_mods.clear();
            }
        }
        Ok(())
    }

    pub fn get_profile(&self, name: &str) -> Option<&ProfileProperties> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn selected(&self) -> Option<&ProfileProperties> {
        self.selected_profile
            .as_deref()
            .and_then(|name| self.get_profile(name))
    }

    /// Show the mods of `name`
    pub fn select_profile(&mut self, name: &str) -> Result<()> {
        self.selected_profile = Some(name.to_string());
        self.load_mods()
    }

    /// Reload the mod list of the selected profile
    pub fn load_mods(&mut self) -> Result<()> {
        self.installed_mods = match &self.selected_profile {
            Some(name) => load_installed_mods(&self.paths.profile_dir(name))?,
            None => Vec::new(),
        };
        Ok(())
    }

    /// Carry out a rename requested by the configure dialog
    pub fn apply_rename(&mut self, request: &ProfileRename) -> Result<()> {
        rename_profile(&self.paths.profiles_dir, &request.from, &request.to)?;
        info!("Renamed profile '{}' to '{}'", request.from, request.to);

        if self.selected_profile.as_deref() == Some(request.from.as_str()) {
            self.selected_profile = Some(request.to.clone());
        }
        self.load_profiles()?;
        self.load_mods()
    }

    /// Carry out a removal requested by the configure dialog
    pub fn apply_remove(&mut self, name: &str) -> Result<()> {
        delete_profile(&self.paths.profiles_dir, name)?;
        info!("Removed profile '{}'", name);
        self.load_profiles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modman_common::{create_profile, ModLoader};
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, AppCore) {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths {
            profiles_dir: dir.path().join("profiles"),
            cache_dir: dir.path().join("cache"),
            assets_dir: dir.path().join("assets"),
        };
        for name in ["Beta", "Alpha"] {
            create_profile(
                &paths.profiles_dir,
                &ProfileProperties {
                    name: name.to_string(),
                    version: "1.20.1".to_string(),
                    modloader: ModLoader::Quilt,
                },
            )
            .unwrap();
        }
        let mut core = AppCore::new(paths);
        core.load_profiles().unwrap();
        (dir, core)
    }

    #[test]
    fn test_profiles_sorted() {
        let (_dir, core) = setup();
        let names: Vec<_> = core.profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_select_loads_mods() {
        let (dir, mut core) = setup();
        let mods = dir.path().join("profiles").join("Alpha").join("mods");
        fs::create_dir_all(&mods).unwrap();
        fs::write(mods.join("custom.jar"), b"jar").unwrap();

        core.select_profile("Alpha").unwrap();
        assert_eq!(core.selected().map(|p| p.name.as_str()), Some("Alpha"));
        assert_eq!(core.installed_mods.len(), 1);
        assert!(core.installed_mods[0].is_custom());
    }

    #[test]
    fn test_apply_rename_follows_selection() {
        let (dir, mut core) = setup();
        core.select_profile("Alpha").unwrap();

        core.apply_rename(&ProfileRename {
            from: "Alpha".to_string(),
            to: "Gamma".to_string(),
        })
        .unwrap();

        assert_eq!(core.selected_profile.as_deref(), Some("Gamma"));
        assert_eq!(core.get_profile("Gamma").map(|p| p.version.as_str()), Some("1.20.1"));
        assert!(!dir.path().join("profiles").join("Alpha").exists());
    }

    #[test]
    fn test_apply_remove_clears_selection() {
        let (_dir, mut core) = setup();
        core.select_profile("Beta").unwrap();

        core.apply_remove("Beta").unwrap();
        assert!(core.selected_profile.is_none());
        assert!(core.installed_mods.is_empty());
        assert_eq!(core.profiles.len(), 1);
    }
}
