// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Minecraft Mod Manager - Common Library
// Shared types, configuration and filesystem operations

pub mod config;
pub mod error;
pub mod icons;
pub mod lang;
pub mod mod_files;
pub mod profile_manager;
pub mod types;
pub mod versions;

pub use config::{AppConfig, Paths};
pub use error::{Error, Result};
pub use icons::{Icon, Placeholder, ICON_SIZE};
pub use lang::Lang;
pub use mod_files::{load_installed_mods, remove_mod_file, rename_mod_file, validate_mod_name};
pub use profile_manager::{
    create_profile, delete_profile, list_profile_names, load_all_profiles, load_profile,
    profile_name_exists, rename_profile, validate_profile_name,
};
pub use types::{
    CustomMod, InstalledMod, ManagedMod, ModLoader, Platform, ProfileProperties, ReleaseType,
    SearchResultMod, VersionEntry, VersionProperties,
};
pub use versions::{McVersionLister, VersionManifest};
