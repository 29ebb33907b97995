// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! New profile dialog

use std::path::PathBuf;
use std::rc::Rc;

use modman_common::profile_manager::{is_valid_profile_char, MAX_PROFILE_NAME_LEN};
use modman_common::{
    create_profile, profile_name_exists, validate_profile_name, Error, McVersionLister, ModLoader,
    Paths, ProfileProperties, Result,
};
use tracing::{debug, info};

use crate::events::{PopupState, Signal};

/// Collects name, Minecraft version and mod loader of a new profile
pub struct AddProfilePopup {
    paths: Paths,
    lister: Rc<dyn McVersionLister>,
    only_releases: bool,
    versions: Vec<String>,
    selected_version: Option<usize>,
    name: String,
    modloader: ModLoader,
    state: PopupState,
    created: Signal<ProfileProperties>,
}

impl AddProfilePopup {
    /// Open the dialog offering release versions only
    pub fn new(paths: Paths, lister: Rc<dyn McVersionLister>) -> Result<Self> {
        let mut popup = Self {
            paths,
            lister,
            only_releases: true,
            versions: Vec::new(),
            selected_version: None,
            name: String::new(),
            modloader: ModLoader::ALL[0],
            state: PopupState::Open,
            created: Signal::new(),
        };
        popup.refresh_versions(true)?;
        Ok(popup)
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PopupState::Open
    }

    pub fn close(&mut self) {
        self.state = PopupState::Closed;
    }

    /// Register a listener for successfully created profiles
    pub fn connect_created<F>(&mut self, f: F)
    where
        F: Fn(&ProfileProperties) + 'static,
    {
        self.created.connect(f);
    }

    /// Update the name field
    ///
    /// Characters outside the allowed set are dropped and the text is cut to
    /// the field length. Returns the text the field should show.
    pub fn set_name(&mut self, text: &str) -> &str {
        self.name = text
            .chars()
            .filter(|c| is_valid_profile_char(*c))
            .take(MAX_PROFILE_NAME_LEN)
            .collect();
        &self.name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn only_releases(&self) -> bool {
        self.only_releases
    }

    /// Switch between release versions and every version
    pub fn set_only_releases(&mut self, only_releases: bool) -> Result<()> {
        if self.only_releases == only_releases && !self.versions.is_empty() {
            return Ok(());
        }
        self.refresh_versions(only_releases)
    }

    /// Query the lister; on failure the flag and the offered list stay as they were
    fn refresh_versions(&mut self, only_releases: bool) -> Result<()> {
        let previous = self.selected_version().map(str::to_string);
        self.versions = self.lister.list_mc_versions(only_releases)?;
        self.only_releases = only_releases;
        debug!(
            "Offering {} Minecraft versions (only releases: {})",
            self.versions.len(),
            self.only_releases
        );

        self.selected_version = previous
            .and_then(|v| self.versions.iter().position(|candidate| *candidate == v))
            .or(if self.versions.is_empty() { None } else { Some(0) });
        Ok(())
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn select_version(&mut self, index: usize) -> bool {
        if index >= self.versions.len() {
            return false;
        }
        self.selected_version = Some(index);
        true
    }

    pub fn selected_version_index(&self) -> Option<usize> {
        self.selected_version
    }

    pub fn selected_version(&self) -> Option<&str> {
        self.selected_version
            .and_then(|i| self.versions.get(i))
            .map(String::as_str)
    }

    pub fn set_modloader(&mut self, modloader: ModLoader) {
        self.modloader = modloader;
    }

    pub fn modloader(&self) -> ModLoader {
        self.modloader
    }

    /// Validate the input and create the profile
    ///
    /// On success the `created` listeners are notified and the popup closes.
    /// On failure nothing is written and the popup stays open.
    pub fn submit(&mut self) -> Result<PathBuf> {
        let name = self.name.trim().to_string();
        validate_profile_name(&name)?;

        if profile_name_exists(&self.paths.profiles_dir, &name, None)? {
            return Err(Error::ProfileExists(name));
        }

        let version = self
            .selected_version()
            .ok_or(Error::NoVersionSelected)?
            .to_string();

        let profile = ProfileProperties {
            name,
            version,
            modloader: self.modloader,
        };
        let dir = create_profile(&self.paths.profiles_dir, &profile)?;
        info!(
            "Created profile '{}' ({} {})",
            profile.name, profile.modloader, profile.version
        );

        self.created.emit(&profile);
        self.close();
        Ok(dir)
    }
}
