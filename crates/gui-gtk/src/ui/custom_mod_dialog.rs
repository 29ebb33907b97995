// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Menu for a custom mod file (remove / rename)

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Orientation};
use libadwaita as adw;
use adw::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use modman_gui_core::{CustomModMenu, GuiEvent, PopupOutcome};
use modman_common::CustomMod;

use super::window::AppState;
use super::{alerts, event_handler};

/// Show the menu for one custom mod
pub fn show(state: &Rc<AppState>, mod_file: CustomMod) {
    let Some(parent) = state.parent_window() else {
        return;
    };

    let stem = mod_file
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| mod_file.file_name.clone());

    let menu = Rc::new(RefCell::new(CustomModMenu::new(mod_file)));
    {
        let state = state.clone();
        menu.borrow_mut().connect_need_refresh(move |_| {
            event_handler::handle_later(&state, GuiEvent::ModListRefresh);
        });
    }

    let dialog = adw::Window::builder()
        .modal(true)
        .transient_for(&parent)
        .default_width(360)
        .title(menu.borrow().file_name())
        .build();

    let toolbar_view = adw::ToolbarView::new();
    toolbar_view.add_top_bar(&adw::HeaderBar::new());

    let content_box = GtkBox::new(Orientation::Vertical, 12);
    content_box.set_margin_start(24);
    content_box.set_margin_end(24);
    content_box.set_margin_top(12);
    content_box.set_margin_bottom(24);

    let remove_button = gtk4::Button::builder()
        .label(state.tr("removeMod"))
        .build();
    remove_button.add_css_class("destructive-action");
    let rename_button = gtk4::Button::builder()
        .label(state.tr("renameMod"))
        .build();
    let close_button = gtk4::Button::builder()
        .label(state.tr("close"))
        .build();

    content_box.append(&remove_button);
    content_box.append(&rename_button);
    content_box.append(&close_button);

    toolbar_view.set_content(Some(&content_box));
    dialog.set_content(Some(&toolbar_view));

    {
        let dialog = dialog.clone();
        close_button.connect_clicked(move |_| dialog.close());
    }

    {
        let dialog = dialog.clone();
        let state = state.clone();
        let menu = menu.clone();
        remove_button.connect_clicked(move |_| {
            let body = format!("{}\n\n{}", state.tr("removeModConfirm"), menu.borrow().file_name());
            let dialog_for_answer = dialog.clone();
            let state_for_answer = state.clone();
            let menu = menu.clone();
            alerts::confirm(&dialog, &state.lang, &state.tr("removeMod"), &body, move |answer| {
                let result = menu.borrow_mut().remove_mod(answer);
                match result {
                    Ok(PopupOutcome::Completed) => {
                        dialog_for_answer.close();
                        event_handler::handle_later(&state_for_answer, GuiEvent::ShowSuccess("modRemoved"));
                    }
                    Ok(PopupOutcome::Cancelled) => {}
                    Err(e) => event_handler::report(&state_for_answer, &e),
                }
            });
        });
    }

    {
        let dialog = dialog.clone();
        let state = state.clone();
        rename_button.connect_clicked(move |_| {
            let dialog_for_answer = dialog.clone();
            let state_for_answer = state.clone();
            let menu = menu.clone();
            alerts::prompt(&dialog, &state.lang, &state.tr("renameMod"), &stem, move |answer| {
                let result = menu.borrow_mut().rename_mod(answer.as_deref());
                match result {
                    Ok(PopupOutcome::Completed) => {
                        dialog_for_answer.close();
                        event_handler::handle_later(&state_for_answer, GuiEvent::ShowSuccess("modRenamed"));
                    }
                    Ok(PopupOutcome::Cancelled) => {}
                    Err(e) => event_handler::report(&state_for_answer, &e),
                }
            });
        });
    }

    dialog.present();
}
