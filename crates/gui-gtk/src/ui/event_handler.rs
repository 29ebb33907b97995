// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! Dispatch of GUI events raised by dialogs and rows

use std::rc::Rc;

use modman_gui_core::GuiEvent;

use super::window::AppState;
use super::{alerts, mods_list, profiles_list};

/// Handle an event on the main loop
pub fn handle(state: &Rc<AppState>, event: GuiEvent) {
    tracing::debug!("Event: {:?}", event);

    match event {
        GuiEvent::ProfileListRefresh => {
            profiles_list::populate(state);
            mods_list::populate(state);
        }
        GuiEvent::ModListRefresh => {
            if let Err(e) = state.core.borrow_mut().load_mods() {
                tracing::warn!("Failed to load mods: {}", e);
            }
            mods_list::populate(state);
        }
        GuiEvent::ShowError(key) => {
            if let Some(window) = state.parent_window() {
                alerts::show_error(&window, &state.lang, key);
            }
        }
        GuiEvent::ShowSuccess(key) => {
            if let Some(window) = state.parent_window() {
                alerts::show_info(&window, &state.lang, key);
            }
        }
    }
}

/// Handle an event once the current signal handler has returned
///
/// Row and popup listeners run while their emitter is borrowed, so anything
/// that rebuilds lists goes through here.
pub fn handle_later(state: &Rc<AppState>, event: GuiEvent) {
    let state = state.clone();
    glib::idle_add_local_once(move || handle(&state, event));
}

/// Report a failed operation to the user
pub fn report(state: &Rc<AppState>, error: &modman_common::Error) {
    if error.is_validation() {
        tracing::debug!("Rejected input: {}", error);
    } else {
        tracing::warn!("{}", error);
    }
    handle_later(state, GuiEvent::ShowError(error.lang_key()));
}
