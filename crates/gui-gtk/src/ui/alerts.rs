// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Message, confirmation and text prompt dialogs

use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;

use modman_gui_core::{Confirmation, Lang};

fn message_dialog(parent: &impl IsA<gtk4::Window>, heading: &str, body: &str) -> adw::MessageDialog {
    adw::MessageDialog::builder()
        .transient_for(parent)
        .modal(true)
        .heading(heading)
        .body(body)
        .build()
}

fn show_message(parent: &impl IsA<gtk4::Window>, lang: &Lang, heading: &str, key: &str) {
    let dialog = message_dialog(parent, &lang.get(heading), &lang.get(key));

    dialog.add_response("ok", &lang.get("ok"));
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");

    dialog.present();
}

/// Show an error dialog for a localization key
pub fn show_error(parent: &impl IsA<gtk4::Window>, lang: &Lang, key: &str) {
    show_message(parent, lang, "error", key);
}

/// Show a success dialog for a localization key
pub fn show_info(parent: &impl IsA<gtk4::Window>, lang: &Lang, key: &str) {
    show_message(parent, lang, "success", key);
}

/// Ask a yes/no question about a destructive action
pub fn confirm<F>(parent: &impl IsA<gtk4::Window>, lang: &Lang, heading: &str, body: &str, on_answer: F)
where
    F: Fn(Confirmation) + 'static,
{
    let dialog = message_dialog(parent, heading, body);

    dialog.add_response("no", &lang.get("no"));
    dialog.add_response("yes", &lang.get("yes"));
    dialog.set_response_appearance("yes", adw::ResponseAppearance::Destructive);
    dialog.set_default_response(Some("no"));
    dialog.set_close_response("no");

    dialog.connect_response(None, move |_, response| {
        on_answer(Confirmation::from(response == "yes"));
    });

    dialog.present();
}

/// Ask for a line of text; the callback gets `None` when cancelled
pub fn prompt<F>(parent: &impl IsA<gtk4::Window>, lang: &Lang, heading: &str, initial: &str, on_answer: F)
where
    F: Fn(Option<String>) + 'static,
{
    let dialog = message_dialog(parent, heading, &lang.get("newName"));

    let entry = gtk4::Entry::builder()
        .text(initial)
        .activates_default(true)
        .build();
    dialog.set_extra_child(Some(&entry));

    dialog.add_response("cancel", &lang.get("cancel"));
    dialog.add_response("ok", &lang.get("ok"));
    dialog.set_response_appearance("ok", adw::ResponseAppearance::Suggested);
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("cancel");

    dialog.connect_response(None, move |_, response| {
        if response == "ok" {
            on_answer(Some(entry.text().to_string()));
        } else {
            on_answer(None);
        }
    });

    dialog.present();
}
