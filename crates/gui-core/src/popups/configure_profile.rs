// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! Rename/remove dialog for a profile
//!
//! The popup only validates and announces requests. The container owns the
//! profile list and performs the change on disk.

use modman_common::{profile_name_exists, validate_profile_name, Error, Paths, Result};
use tracing::debug;

use super::PopupOutcome;
use crate::events::{Confirmation, PopupState, Signal};

/// Request to rename a profile directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRename {
    pub from: String,
    pub to: String,
}

pub struct ConfigureProfilePopup {
    paths: Paths,
    profile_name: String,
    state: PopupState,
    rename_requested: Signal<ProfileRename>,
    remove_requested: Signal<String>,
}

impl ConfigureProfilePopup {
    pub fn new(paths: Paths, profile_name: impl Into<String>) -> Self {
        Self {
            paths,
            profile_name: profile_name.into(),
            state: PopupState::Open,
            rename_requested: Signal::new(),
            remove_requested: Signal::new(),
        }
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
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

    pub fn connect_rename_requested<F>(&mut self, f: F)
    where
        F: Fn(&ProfileRename) + 'static,
    {
        self.rename_requested.connect(f);
    }

    /// Listeners receive the name of the profile to delete
    pub fn connect_remove_requested<F>(&mut self, f: F)
    where
        F: Fn(&String) + 'static,
    {
        self.remove_requested.connect(f);
    }

    /// Validate the prompted name and ask the container to rename
    ///
    /// `None` means the prompt was cancelled. Keeping the current name closes
    /// the popup without a request.
    pub fn ask_rename(&mut self, answer: Option<&str>) -> Result<PopupOutcome> {
        let Some(new_name) = answer else {
            return Ok(PopupOutcome::Cancelled);
        };

        let new_name = new_name.trim();
        validate_profile_name(new_name)?;

        if new_name != self.profile_name {
            if profile_name_exists(&self.paths.profiles_dir, new_name, Some(&self.profile_name))? {
                return Err(Error::ProfileExists(new_name.to_string()));
            }

            debug!("Requesting rename of '{}' to '{}'", self.profile_name, new_name);
            self.rename_requested.emit(&ProfileRename {
                from: self.profile_name.clone(),
                to: new_name.to_string(),
            });
        }

        self.close();
        Ok(PopupOutcome::Completed)
    }

    /// Ask the container to delete the profile once the user confirmed
    pub fn ask_remove(&mut self, confirmation: Confirmation) -> PopupOutcome {
        if confirmation == Confirmation::No {
            return PopupOutcome::Cancelled;
        }

        debug!("Requesting removal of '{}'", self.profile_name);
        self.remove_requested.emit(&self.profile_name);
        self.close();
        PopupOutcome::Completed
    }
}
