// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// New profile dialog

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Orientation};
use libadwaita as adw;
use adw::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use modman_gui_core::{AddProfilePopup, GuiEvent, ModLoader};

use super::event_handler;
use super::window::AppState;

/// Show the dialog for creating a profile
pub fn show(state: &Rc<AppState>) {
    let Some(parent) = state.parent_window() else {
        return;
    };

    let lister = state.lister.borrow().clone();
    let popup = match AddProfilePopup::new(state.paths.clone(), lister) {
        Ok(popup) => Rc::new(RefCell::new(popup)),
        Err(e) => {
            event_handler::report(state, &e);
            return;
        }
    };

    {
        let state = state.clone();
        popup.borrow_mut().connect_created(move |_| {
            event_handler::handle_later(&state, GuiEvent::ShowSuccess("profileCreationSuccess"));
            event_handler::handle_later(&state, GuiEvent::ProfileListRefresh);
        });
    }

    let dialog = create_dialog(&parent, state, popup);
    dialog.present();
}

fn create_dialog(
    parent: &impl IsA<gtk4::Window>,
    state: &Rc<AppState>,
    popup: Rc<RefCell<AddProfilePopup>>,
) -> adw::Window {
    let dialog = adw::Window::builder()
        .modal(true)
        .transient_for(parent)
        .default_width(460)
        .title(state.tr("addProfile"))
        .build();

    // Add ESC key handler to close dialog
    {
        let dialog_clone = dialog.clone();
        let key_controller = gtk4::EventControllerKey::new();
        key_controller.connect_key_pressed(move |_controller, key, _code, _modifier| {
            if key == gtk4::gdk::Key::Escape {
                dialog_clone.close();
                glib::Propagation::Stop
            } else {
                glib::Propagation::Proceed
            }
        });
        dialog.add_controller(key_controller);
    }

    let toolbar_view = adw::ToolbarView::new();

    let header = adw::HeaderBar::new();
    header.set_show_end_title_buttons(false);

    let cancel_button = gtk4::Button::builder()
        .label(state.tr("cancel"))
        .build();
    let create_button = gtk4::Button::builder()
        .label(state.tr("create"))
        .build();
    create_button.add_css_class("suggested-action");

    header.pack_start(&cancel_button);
    header.pack_end(&create_button);
    toolbar_view.add_top_bar(&header);

    let content_box = GtkBox::new(Orientation::Vertical, 24);
    content_box.set_margin_start(24);
    content_box.set_margin_end(24);
    content_box.set_margin_top(24);
    content_box.set_margin_bottom(24);

    let group = adw::PreferencesGroup::new();

    let name_row = adw::EntryRow::builder()
        .title(state.tr("profileName"))
        .build();
    name_row.set_tooltip_text(Some(state.tr("profileNameHere").as_str()));
    {
        let popup = popup.clone();
        name_row.connect_changed(move |row| {
            let text = row.text();
            let accepted = popup.borrow_mut().set_name(&text).to_string();
            if accepted != text.as_str() {
                row.set_text(&accepted);
            }
        });
    }
    group.add(&name_row);

    let version_model = gtk4::StringList::new(&[]);
    fill_versions(&version_model, &popup.borrow());
    let version_row = adw::ComboRow::builder()
        .title(state.tr("mcVersion"))
        .model(&version_model)
        .build();
    if let Some(index) = popup.borrow().selected_version_index() {
        version_row.set_selected(index as u32);
    }
    {
        let popup = popup.clone();
        version_row.connect_selected_notify(move |row| {
            popup.borrow_mut().select_version(row.selected() as usize);
        });
    }
    group.add(&version_row);

    let releases_row = adw::SwitchRow::builder()
        .title(state.tr("onlyShowReleases"))
        .active(popup.borrow().only_releases())
        .build();
    {
        let popup = popup.clone();
        let state = state.clone();
        let version_row = version_row.clone();
        releases_row.connect_active_notify(move |row| {
            let result = popup.borrow_mut().set_only_releases(row.is_active());
            if let Err(e) = result {
                event_handler::report(&state, &e);
                row.set_active(popup.borrow().only_releases());
                return;
            }

            // Rebuilding the model fires selected-notify, so read the popup first
            let selected = popup.borrow().selected_version_index();
            let model = gtk4::StringList::new(&[]);
            fill_versions(&model, &popup.borrow());
            version_row.set_model(Some(&model));
            if let Some(index) = selected {
                version_row.set_selected(index as u32);
            }
        });
    }
    group.add(&releases_row);

    let loader_names: Vec<&str> = ModLoader::ALL.iter().map(|l| l.as_str()).collect();
    let loader_row = adw::ComboRow::builder()
        .title(state.tr("modloader"))
        .model(&gtk4::StringList::new(&loader_names))
        .build();
    {
        let popup = popup.clone();
        loader_row.connect_selected_notify(move |row| {
            if let Some(loader) = ModLoader::ALL.get(row.selected() as usize) {
                popup.borrow_mut().set_modloader(*loader);
            }
        });
    }
    group.add(&loader_row);

    content_box.append(&group);
    toolbar_view.set_content(Some(&content_box));

    {
        let dialog = dialog.clone();
        cancel_button.connect_clicked(move |_| dialog.close());
    }

    {
        let dialog = dialog.clone();
        let state = state.clone();
        create_button.connect_clicked(move |_| {
            let result = popup.borrow_mut().submit();
            match result {
                Ok(path) => {
                    tracing::debug!("Profile directory created at {}", path.display());
                    dialog.close();
                }
                Err(e) => event_handler::report(&state, &e),
            }
        });
    }

    dialog.set_content(Some(&toolbar_view));
    dialog
}

fn fill_versions(model: &gtk4::StringList, popup: &AddProfilePopup) {
    for version in popup.versions() {
        model.append(version);
    }
}
