// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Profile configuration dialog (rename / remove)

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Orientation};
use libadwaita as adw;
use adw::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use modman_gui_core::{ConfigureProfilePopup, GuiEvent, PopupOutcome};

use super::window::AppState;
use super::{alerts, event_handler};

/// Show the configuration dialog for profile `name`
pub fn show(state: &Rc<AppState>, name: &str) {
    let Some(parent) = state.parent_window() else {
        return;
    };

    let popup = Rc::new(RefCell::new(ConfigureProfilePopup::new(state.paths.clone(), name)));

    // The container performs the changes the popup asks for
    {
        let state = state.clone();
        popup.borrow_mut().connect_rename_requested(move |request| {
            let result = state.core.borrow_mut().apply_rename(request);
            match result {
                Ok(()) => event_handler::handle_later(&state, GuiEvent::ProfileListRefresh),
                Err(e) => event_handler::report(&state, &e),
            }
        });
    }
    {
        let state = state.clone();
        popup.borrow_mut().connect_remove_requested(move |name| {
            let result = state.core.borrow_mut().apply_remove(name);
            match result {
                Ok(()) => event_handler::handle_later(&state, GuiEvent::ProfileListRefresh),
                Err(e) => event_handler::report(&state, &e),
            }
        });
    }

    let dialog = adw::Window::builder()
        .modal(true)
        .transient_for(&parent)
        .default_width(360)
        .title(state.tr("configureProfile"))
        .build();

    let toolbar_view = adw::ToolbarView::new();
    toolbar_view.add_top_bar(&adw::HeaderBar::new());

    let content_box = GtkBox::new(Orientation::Vertical, 12);
    content_box.set_margin_start(24);
    content_box.set_margin_end(24);
    content_box.set_margin_top(12);
    content_box.set_margin_bottom(24);

    let name_label = gtk4::Label::new(Some(name));
    name_label.add_css_class("title-3");
    content_box.append(&name_label);

    let rename_button = gtk4::Button::builder()
        .label(state.tr("rename"))
        .build();
    let remove_button = gtk4::Button::builder()
        .label(state.tr("removeProfile"))
        .build();
    remove_button.add_css_class("destructive-action");
    let close_button = gtk4::Button::builder()
        .label(state.tr("close"))
        .build();

    content_box.append(&rename_button);
    content_box.append(&remove_button);
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
        let popup = popup.clone();
        rename_button.connect_clicked(move |_| {
            let current = popup.borrow().profile_name().to_string();
            let dialog_for_answer = dialog.clone();
            let popup = popup.clone();
            let state_for_answer = state.clone();
            alerts::prompt(&dialog, &state.lang, &state.tr("rename"), &current, move |answer| {
                let result = popup.borrow_mut().ask_rename(answer.as_deref());
                match result {
                    Ok(PopupOutcome::Completed) => dialog_for_answer.close(),
                    Ok(PopupOutcome::Cancelled) => {}
                    Err(e) => event_handler::report(&state_for_answer, &e),
                }
            });
        });
    }

    {
        let dialog = dialog.clone();
        let state = state.clone();
        remove_button.connect_clicked(move |_| {
            let name = popup.borrow().profile_name().to_string();
            let body = format!("{}\n\n{}", state.tr("removeProfileConfirm"), name);
            let dialog_for_answer = dialog.clone();
            let popup = popup.clone();
            alerts::confirm(&dialog, &state.lang, &state.tr("removeProfile"), &body, move |answer| {
                let outcome = popup.borrow_mut().ask_remove(answer);
                if outcome == PopupOutcome::Completed {
                    dialog_for_answer.close();
                }
            });
        });
    }

    dialog.present();
}
