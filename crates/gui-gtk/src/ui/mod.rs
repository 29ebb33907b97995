// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// UI module - GTK4/libadwaita widgets and windows

pub mod window;
pub mod profiles_list;
pub mod mods_list;
pub mod rows;
pub mod add_profile_dialog;
pub mod configure_profile_dialog;
pub mod custom_mod_dialog;
pub mod alerts;
pub mod event_handler;
pub mod style;
