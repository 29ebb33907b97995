// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Installed mods pane

use gtk4::prelude::*;
use libadwaita as adw;
use std::rc::Rc;

use modman_gui_core::{InstalledMod, ModSelect, RowList};

use super::custom_mod_dialog;
use super::rows::{self, GtkRowStyle};
use super::window::AppState;

/// Create the mods pane
pub fn create(state: Rc<AppState>) -> gtk4::Box {
    let pane = gtk4::Box::new(gtk4::Orientation::Vertical, 0);

    let title = gtk4::Label::new(Some(state.tr("mods").as_str()));
    title.add_css_class("title-4");
    title.set_margin_top(12);
    title.set_margin_bottom(2);
    pane.append(&title);
    pane.append(&rows::separation_line());

    let scrolled = gtk4::ScrolledWindow::new();
    scrolled.set_vexpand(true);

    let list_box = gtk4::ListBox::new();
    list_box.set_selection_mode(gtk4::SelectionMode::None);
    list_box.add_css_class("boxed-list");
    list_box.set_margin_top(12);
    list_box.set_margin_bottom(12);
    list_box.set_margin_start(12);
    list_box.set_margin_end(12);
    list_box.set_valign(gtk4::Align::Start);

    state.mod_list.replace(Some(list_box.clone()));

    scrolled.set_child(Some(&list_box));
    pane.append(&scrolled);
    pane
}

/// Rebuild the rows for the mods already loaded into the core state
pub fn populate(state: &Rc<AppState>) {
    let Some(list_box) = state.mod_list.borrow().clone() else {
        return;
    };

    while let Some(child) = list_box.first_child() {
        list_box.remove(&child);
    }

    let (mods, has_profile) = {
        let core = state.core.borrow();
        (core.installed_mods.clone(), core.selected_profile.is_some())
    };

    if mods.is_empty() {
        if has_profile {
            list_box.append(&rows::create_empty_state(
                "application-x-addon-symbolic",
                &state.tr("noMods"),
                None,
            ));
        }
        state.mod_rows.replace(RowList::new());
        return;
    }

    let mut row_list = RowList::new();
    for (index, installed) in mods.into_iter().enumerate() {
        let widget = adw::ActionRow::new();
        let mut row = ModSelect::new(installed, &state.paths, &state.lang, Box::new(GtkRowStyle::new(&widget)));
        rows::fill_row(&widget, row.view_model(), &state.paths);

        {
            let state = state.clone();
            row.connect_selected(move |installed: &InstalledMod| {
                let state = state.clone();
                let installed = installed.clone();
                glib::idle_add_local_once(move || on_mod_selected(&state, installed));
            });
        }

        let hover_state = state.clone();
        let press_state = state.clone();
        rows::connect_pointer(
            &widget,
            move |hovered| hover_state.mod_rows.borrow_mut().set_hovered(index, hovered),
            move || {
                press_state.mod_rows.borrow_mut().press(index);
            },
        );

        list_box.append(&widget);
        row_list.push(row);
    }

    state.mod_rows.replace(row_list);
}

fn on_mod_selected(state: &Rc<AppState>, installed: InstalledMod) {
    match installed {
        InstalledMod::Custom(custom) => custom_mod_dialog::show(state, custom),
        // Version picking for managed mods needs a mod platform backend
        InstalledMod::Managed(managed) => {
            tracing::debug!(
                "Mod selected: {} ({} on {})",
                managed.mod_name,
                managed.version_name,
                managed.platform
            );
        }
    }
}
