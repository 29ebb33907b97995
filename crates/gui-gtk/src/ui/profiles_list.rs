// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Profiles list pane

use gtk4::prelude::*;
use libadwaita as adw;
use std::rc::Rc;

use modman_gui_core::{ProfileSelect, RowList};

use super::event_handler;
use super::rows::{self, GtkRowStyle};
use super::window::AppState;

/// Create the profiles pane
pub fn create(state: Rc<AppState>) -> gtk4::Box {
    let pane = gtk4::Box::new(gtk4::Orientation::Vertical, 0);

    let title = gtk4::Label::new(Some(state.tr("profiles").as_str()));
    title.add_css_class("title-4");
    title.set_margin_top(12);
    title.set_margin_bottom(2);
    pane.append(&title);
    pane.append(&rows::separation_line());

    let scrolled = gtk4::ScrolledWindow::new();
    scrolled.set_vexpand(true);
    scrolled.set_hscrollbar_policy(gtk4::PolicyType::Never);

    let list_box = gtk4::ListBox::new();
    list_box.set_selection_mode(gtk4::SelectionMode::None);
    list_box.add_css_class("navigation-sidebar");

    state.profile_list.replace(Some(list_box.clone()));

    scrolled.set_child(Some(&list_box));
    pane.append(&scrolled);
    pane
}

/// Reload profiles from disk and rebuild their rows
pub fn populate(state: &Rc<AppState>) {
    let Some(list_box) = state.profile_list.borrow().clone() else {
        return;
    };

    while let Some(child) = list_box.first_child() {
        list_box.remove(&child);
    }

    if let Err(e) = state.core.borrow_mut().load_profiles() {
        tracing::warn!("Failed to load profiles: {}", e);
    }

    let (profiles, selected) = {
        let core = state.core.borrow();
        (core.profiles.clone(), core.selected_profile.clone())
    };

    if let Some(button) = state.configure_button.borrow().as_ref() {
        button.set_sensitive(selected.is_some());
    }

    if profiles.is_empty() {
        list_box.append(&rows::create_empty_state(
            "folder-symbolic",
            &state.tr("noProfiles"),
            Some(state.tr("noProfilesHint").as_str()),
        ));
        state.profile_rows.replace(RowList::new());
        return;
    }

    let mut row_list = RowList::new();
    for (index, profile) in profiles.into_iter().enumerate() {
        let is_selected = selected.as_deref() == Some(profile.name.as_str());
        let widget = adw::ActionRow::new();
        let mut row = ProfileSelect::new(profile, &state.paths, &state.lang, Box::new(GtkRowStyle::new(&widget)));
        rows::fill_row(&widget, row.view_model(), &state.paths);
        if is_selected {
            row.set_selected(true);
        }

        {
            let state = state.clone();
            row.connect_selected(move |name: &String| {
                let state = state.clone();
                let name = name.clone();
                glib::idle_add_local_once(move || on_profile_selected(&state, &name));
            });
        }

        let hover_state = state.clone();
        let press_state = state.clone();
        rows::connect_pointer(
            &widget,
            move |hovered| hover_state.profile_rows.borrow_mut().set_hovered(index, hovered),
            move || {
                press_state.profile_rows.borrow_mut().press(index);
            },
        );

        list_box.append(&widget);
        row_list.push(row);
    }

    state.profile_rows.replace(row_list);
}

fn on_profile_selected(state: &Rc<AppState>, name: &str) {
    tracing::debug!("Profile selected: {}", name);

    if let Err(e) = state.core.borrow_mut().select_profile(name) {
        event_handler::report(state, &e);
    }

    if let Some(button) = state.configure_button.borrow().as_ref() {
        button.set_sensitive(true);
    }

    super::mods_list::populate(state);
}
