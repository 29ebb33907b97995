// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! View models - Data structures prepared for UI display

use modman_common::{
    Icon, InstalledMod, Lang, Paths, Placeholder, ProfileProperties, SearchResultMod,
};

/// Text and image of a list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewModel {
    pub title: String,
    /// Second line; rows without one show only the title
    pub subtitle: Option<String>,
    pub icon: Icon,
}

impl RowViewModel {
    /// Profile row: loader icon, name, "<loader> <version>"
    pub fn from_profile(profile: &ProfileProperties, paths: &Paths) -> Self {
        Self {
            title: profile.name.clone(),
            subtitle: Some(format!("{} {}", profile.modloader, profile.version)),
            icon: Icon::resolve(
                &paths.asset_icon(&profile.modloader.icon_stem()),
                Placeholder::NoMedia,
            ),
        }
    }

    /// Installed mod row: cached platform icon and version for managed mods,
    /// jar placeholder and file name for custom ones
    pub fn from_installed_mod(installed: &InstalledMod, paths: &Paths) -> Self {
        match installed {
            InstalledMod::Managed(m) => Self {
                title: m.mod_name.clone(),
                subtitle: (!m.version_name.is_empty()).then(|| m.version_name.clone()),
                icon: Icon::resolve(&paths.mod_icon_path(m.platform, &m.mod_id), Placeholder::NoMedia),
            },
            InstalledMod::Custom(c) => Self {
                title: c.file_name.clone(),
                subtitle: None,
                icon: Icon::Placeholder(Placeholder::Jar),
            },
        }
    }

    /// Search result row: icon, name, "by <author>"
    pub fn from_search_result(result: &SearchResultMod, lang: &Lang) -> Self {
        Self {
            title: result.name.clone(),
            subtitle: Some(format!("{} {}", lang.get("by"), result.author)),
            icon: Icon::resolve(&result.icon, Placeholder::NoMedia),
        }
    }
}

/// Horizontal divider between sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeparationLine;

impl SeparationLine {
    /// Fixed height in pixels
    pub const HEIGHT: i32 = 10;
}

#[cfg(test)]
mod tests {
    use super::*;
    use modman_common::{CustomMod, ManagedMod, ModLoader, Platform};
    use std::path::PathBuf;

    fn paths(root: &std::path::Path) -> Paths {
        Paths {
            profiles_dir: root.join("profiles"),
            cache_dir: root.join("cache"),
            assets_dir: root.join("assets"),
        }
    }

    #[test]
    fn test_profile_row() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        std::fs::create_dir_all(&paths.assets_dir).unwrap();
        std::fs::write(paths.asset_icon("neoforge"), b"png").unwrap();

        let vm = RowViewModel::from_profile(
            &ProfileProperties {
                name: "Pack".to_string(),
                version: "1.20.4".to_string(),
                modloader: ModLoader::NeoForge,
            },
            &paths,
        );
        assert_eq!(vm.title, "Pack");
        assert_eq!(vm.subtitle.as_deref(), Some("NeoForge 1.20.4"));
        assert_eq!(vm.icon, Icon::File(paths.asset_icon("neoforge")));
    }

    #[test]
    fn test_managed_mod_without_cached_icon() {
        let dir = tempfile::tempdir().unwrap();
        let vm = RowViewModel::from_installed_mod(
            &InstalledMod::Managed(ManagedMod {
                mod_id: "P7dR8mSH".to_string(),
                mod_name: "Fabric API".to_string(),
                file_name: "fabric-api.jar".to_string(),
                version_name: String::new(),
                version_id: "x".to_string(),
                platform: Platform::Modrinth,
            }),
            &paths(dir.path()),
        );
        assert_eq!(vm.title, "Fabric API");
        assert_eq!(vm.subtitle, None);
        assert_eq!(vm.icon, Icon::Placeholder(Placeholder::NoMedia));
    }

    #[test]
    fn test_custom_mod_uses_jar_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let vm = RowViewModel::from_installed_mod(
            &InstalledMod::Custom(CustomMod {
                file_name: "mine.jar".to_string(),
                path: PathBuf::from("/x/mine.jar"),
            }),
            &paths(dir.path()),
        );
        assert_eq!(vm.title, "mine.jar");
        assert_eq!(vm.icon, Icon::Placeholder(Placeholder::Jar));
    }

    #[test]
    fn test_search_result_author_line() {
        let vm = RowViewModel::from_search_result(
            &SearchResultMod {
                id: "AANobbMI".to_string(),
                name: "Sodium".to_string(),
                author: "jellysquid3".to_string(),
                icon: PathBuf::from("/does/not/exist.png"),
                platform: Platform::Modrinth,
            },
            &Lang::default(),
        );
        assert_eq!(vm.subtitle.as_deref(), Some("by jellysquid3"));
        assert_eq!(vm.icon, Icon::Placeholder(Placeholder::NoMedia));
    }
}
