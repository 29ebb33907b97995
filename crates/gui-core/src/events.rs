// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! Event handling traits and types

use std::fmt;

/// Callback list a widget model notifies when something happens
///
/// Widgets live on the UI thread, so callbacks need not be `Send`.
pub struct Signal<T> {
    slots: Vec<Box<dyn Fn(&T)>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").field("slots", &self.slots.len()).finish()
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback
    pub fn connect<F>(&mut self, slot: F)
    where
        F: Fn(&T) + 'static,
    {
        self.slots.push(Box::new(slot));
    }

    /// Call every registered callback, in registration order
    pub fn emit(&self, value: &T) {
        for slot in &self.slots {
            slot(value);
        }
    }

    pub fn is_connected(&self) -> bool {
        !self.slots.is_empty()
    }
}

/// Visual state of a selectable row, implemented by the toolkit layer
pub trait RowStyle {
    /// Gray the row out while the pointer is over it
    fn set_hovered(&self, hovered: bool);

    /// Outline the row while it is selected
    fn set_selected(&self, selected: bool);
}

/// Style sink for rows that are not on screen (tests, headless use)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStyle;

impl RowStyle for NoStyle {
    fn set_hovered(&self, _hovered: bool) {}
    fn set_selected(&self, _selected: bool) {}
}

/// Answer to a yes/no confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl From<bool> for Confirmation {
    fn from(yes: bool) -> Self {
        if yes {
            Confirmation::Yes
        } else {
            Confirmation::No
        }
    }
}

/// Lifecycle of a modal popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    Open,
    Closed,
}

/// Events the container reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiEvent {
    /// Profile list needs refresh
    ProfileListRefresh,

    /// Mod list of the selected profile needs refresh
    ModListRefresh,

    /// Show error message (localization key)
    ShowError(&'static str),

    /// Show success message (localization key)
    ShowSuccess(&'static str),
}
