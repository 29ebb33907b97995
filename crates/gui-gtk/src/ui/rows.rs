// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// List row widgets backing the selectable row models

use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;

use modman_common::ICON_SIZE;
use modman_gui_core::{Icon, Paths, RowStyle, RowViewModel, SeparationLine};

const HOVERED_CLASS: &str = "row-hovered";
const SELECTED_CLASS: &str = "row-selected";

/// Applies row visual state as CSS classes on the widget
pub struct GtkRowStyle {
    widget: gtk4::Widget,
}

impl GtkRowStyle {
    pub fn new(widget: &impl IsA<gtk4::Widget>) -> Self {
        Self {
            widget: widget.clone().upcast(),
        }
    }

    fn toggle_class(&self, class: &str, on: bool) {
        if on {
            self.widget.add_css_class(class);
        } else {
            self.widget.remove_css_class(class);
        }
    }
}

impl RowStyle for GtkRowStyle {
    fn set_hovered(&self, hovered: bool) {
        self.toggle_class(HOVERED_CLASS, hovered);
    }

    fn set_selected(&self, selected: bool) {
        self.toggle_class(SELECTED_CLASS, selected);
    }
}

/// Fill a freshly created row from its view model
pub fn fill_row(row: &adw::ActionRow, view_model: &RowViewModel, paths: &Paths) {
    row.set_title(&view_model.title);
    if let Some(subtitle) = &view_model.subtitle {
        row.set_subtitle(subtitle);
    }
    row.add_prefix(&create_icon(&view_model.icon, paths));
    row.add_css_class("selectable-row");
}

/// Image for a row icon, scaled to the row icon size
///
/// Placeholders prefer the bundled asset and fall back to a theme icon.
fn create_icon(icon: &Icon, paths: &Paths) -> gtk4::Image {
    let image = match icon {
        Icon::File(path) => gtk4::Image::from_file(path),
        Icon::Placeholder(placeholder) => {
            let asset = paths.asset_icon(placeholder.asset_stem());
            if asset.is_file() {
                gtk4::Image::from_file(asset)
            } else {
                gtk4::Image::from_icon_name(placeholder.icon_name())
            }
        }
    };
    image.set_pixel_size(ICON_SIZE);
    image
}

/// Route pointer hover and presses on `widget` to the given handlers
pub fn connect_pointer<H, P>(widget: &impl IsA<gtk4::Widget>, on_hover: H, on_press: P)
where
    H: Fn(bool) + Clone + 'static,
    P: Fn() + 'static,
{
    let motion = gtk4::EventControllerMotion::new();
    {
        let on_hover = on_hover.clone();
        motion.connect_enter(move |_, _, _| on_hover(true));
    }
    motion.connect_leave(move |_| on_hover(false));
    widget.add_controller(motion);

    let click = gtk4::GestureClick::new();
    click.connect_pressed(move |_, _, _, _| on_press());
    widget.add_controller(click);
}

/// Horizontal divider between list sections
pub fn separation_line() -> gtk4::Separator {
    let line = gtk4::Separator::new(gtk4::Orientation::Horizontal);
    line.set_height_request(SeparationLine::HEIGHT);
    line
}

/// Placeholder shown in a list without rows
pub fn create_empty_state(icon_name: &str, title: &str, hint: Option<&str>) -> gtk4::Box {
    let empty_box = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    empty_box.set_valign(gtk4::Align::Center);
    empty_box.set_vexpand(true);
    empty_box.set_margin_top(48);
    empty_box.set_margin_bottom(48);

    let icon = gtk4::Image::from_icon_name(icon_name);
    icon.set_pixel_size(96);
    icon.add_css_class("dim-label");
    empty_box.append(&icon);

    let label = gtk4::Label::new(Some(title));
    label.add_css_class("title-2");
    empty_box.append(&label);

    if let Some(hint) = hint {
        let sublabel = gtk4::Label::new(Some(hint));
        sublabel.add_css_class("dim-label");
        empty_box.append(&sublabel);
    }

    empty_box
}
