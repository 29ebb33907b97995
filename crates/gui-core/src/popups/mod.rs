// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! Modal dialog models
//!
//! Each popup takes the user's answers as arguments instead of blocking on a
//! nested dialog. A method returning `Err` leaves the popup open so the front
//! end can show the error and let the user correct the input.

pub mod add_profile;
pub mod configure_profile;
pub mod custom_mod_menu;

pub use add_profile::AddProfilePopup;
pub use configure_profile::{ConfigureProfilePopup, ProfileRename};
pub use custom_mod_menu::CustomModMenu;

/// What a popup action did when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupOutcome {
    /// The action ran and the popup closed
    Completed,
    /// The user backed out; the popup stays open
    Cancelled,
}
