// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! Framework-agnostic GUI core for Minecraft Mod Manager
//!
//! This crate contains the widget models, state and view models that the
//! toolkit front end renders.
//!
//! [`SearchModSelect`] and [`ModVersionRadio`] serve the mod search and
//! version picker, which need a mod platform backend. The GTK front end does
//! not render them yet; pressing a managed mod there only logs it.

pub mod events;
pub mod popups;
pub mod rows;
pub mod state;
pub mod version_radio;
pub mod view_models;

// Re-export commonly used types
pub use events::{Confirmation, GuiEvent, NoStyle, PopupState, RowStyle, Signal};
pub use popups::{AddProfilePopup, ConfigureProfilePopup, CustomModMenu, PopupOutcome, ProfileRename};
pub use rows::{ModSelect, ProfileSelect, RowData, RowList, SearchModSelect, SelectableRow};
pub use state::AppCore;
pub use version_radio::{version_key_from_label, ModVersionRadio};
pub use view_models::{RowViewModel, SeparationLine};

// Re-export types from common crate for convenience
pub use modman_common::{
    AppConfig, Error, Icon, InstalledMod, Lang, ModLoader, Paths, Placeholder, ProfileProperties,
    SearchResultMod, VersionEntry, VersionProperties,
};
