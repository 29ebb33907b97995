// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! Selectable list rows for profiles, installed mods and search results

use modman_common::{InstalledMod, Lang, Paths, ProfileProperties, SearchResultMod};
use tracing::debug;

use crate::events::{RowStyle, Signal};
use crate::view_models::RowViewModel;

/// Record wrapped by a selectable row
pub trait RowData {
    /// Value handed to selection listeners
    type Payload;

    fn payload(&self) -> Self::Payload;

    /// Exclusive rows stay outlined once selected and ignore repeated presses
    fn is_exclusive(&self) -> bool {
        true
    }

    fn view_model(&self, paths: &Paths, lang: &Lang) -> RowViewModel;
}

impl RowData for ProfileProperties {
    /// Profiles are announced by name
    type Payload = String;

    fn payload(&self) -> String {
        self.name.clone()
    }

    fn view_model(&self, paths: &Paths, _lang: &Lang) -> RowViewModel {
        RowViewModel::from_profile(self, paths)
    }
}

impl RowData for InstalledMod {
    type Payload = InstalledMod;

    fn payload(&self) -> InstalledMod {
        self.clone()
    }

    fn is_exclusive(&self) -> bool {
        !self.is_custom()
    }

    fn view_model(&self, paths: &Paths, _lang: &Lang) -> RowViewModel {
        RowViewModel::from_installed_mod(self, paths)
    }
}

impl RowData for SearchResultMod {
    type Payload = SearchResultMod;

    fn payload(&self) -> SearchResultMod {
        self.clone()
    }

    fn view_model(&self, _paths: &Paths, lang: &Lang) -> RowViewModel {
        RowViewModel::from_search_result(self, lang)
    }
}

/// A clickable row that tracks hover and selection and announces selection
pub struct SelectableRow<D: RowData> {
    data: D,
    view_model: RowViewModel,
    hovered: bool,
    selected: bool,
    style: Box<dyn RowStyle>,
    was_selected: Signal<D::Payload>,
}

pub type ProfileSelect = SelectableRow<ProfileProperties>;
pub type ModSelect = SelectableRow<InstalledMod>;
pub type SearchModSelect = SelectableRow<SearchResultMod>;

impl<D: RowData> SelectableRow<D> {
    pub fn new(data: D, paths: &Paths, lang: &Lang, style: Box<dyn RowStyle>) -> Self {
        let view_model = data.view_model(paths, lang);
        Self {
            data,
            view_model,
            hovered: false,
            selected: false,
            style,
            was_selected: Signal::new(),
        }
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn view_model(&self) -> &RowViewModel {
        &self.view_model
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Re-resolve the icon, e.g. after it finished downloading
    pub fn update_icon(&mut self, paths: &Paths, lang: &Lang) {
        self.view_model.icon = self.data.view_model(paths, lang).icon;
    }

    /// Register a selection listener
    pub fn connect_selected<F>(&mut self, f: F)
    where
        F: Fn(&D::Payload) + 'static,
    {
        self.was_selected.connect(f);
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.style.set_hovered(hovered);
    }

    /// Pointer press on the row; returns whether listeners were notified
    pub fn press(&mut self) -> bool {
        self.set_selected(true)
    }

    /// Select or deselect the row; returns whether listeners were notified
    pub fn set_selected(&mut self, selected: bool) -> bool {
        if !selected {
            self.selected = false;
            self.style.set_selected(false);
            return false;
        }

        if !self.data.is_exclusive() {
            self.was_selected.emit(&self.data.payload());
            return true;
        }

        if self.selected {
            return false;
        }

        self.selected = true;
        self.style.set_selected(true);
        debug!("Row selected: {}", self.view_model.title);
        self.was_selected.emit(&self.data.payload());
        true
    }
}

/// Ordered rows with a single exclusive highlight
pub struct RowList<D: RowData> {
    rows: Vec<SelectableRow<D>>,
}

impl<D: RowData> Default for RowList<D> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<D: RowData> RowList<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: SelectableRow<D>) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectableRow<D>> {
        self.rows.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SelectableRow<D>> {
        self.rows.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectableRow<D>> {
        self.rows.iter()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.is_selected())
    }

    /// Press row `index`, clearing the previous highlight when it takes over
    pub fn press(&mut self, index: usize) -> bool {
        let Some(row) = self.rows.get_mut(index) else {
            return false;
        };

        let emitted = row.press();
        if emitted && row.is_selected() {
            for (i, other) in self.rows.iter_mut().enumerate() {
                if i != index && other.is_selected() {
                    other.set_selected(false);
                }
            }
        }
        emitted
    }

    pub fn set_hovered(&mut self, index: usize, hovered: bool) {
        if let Some(row) = self.rows.get_mut(index) {
            row.set_hovered(hovered);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NoStyle;
    use modman_common::{CustomMod, ManagedMod, ModLoader, Platform};
    use std::cell::{Cell, RefCell};
    use std::path::PathBuf;
    use std::rc::Rc;

    fn paths() -> Paths {
        Paths {
            profiles_dir: PathBuf::from("/nonexistent/profiles"),
            cache_dir: PathBuf::from("/nonexistent/cache"),
            assets_dir: PathBuf::from("/nonexistent/assets"),
        }
    }

    fn managed() -> InstalledMod {
        InstalledMod::Managed(ManagedMod {
            mod_id: "AANobbMI".to_string(),
            mod_name: "Sodium".to_string(),
            file_name: "sodium.jar".to_string(),
            version_name: "0.5.8".to_string(),
            version_id: "v1".to_string(),
            platform: Platform::Modrinth,
        })
    }

    fn custom() -> InstalledMod {
        InstalledMod::Custom(CustomMod {
            file_name: "mine.jar".to_string(),
            path: PathBuf::from("/mods/mine.jar"),
        })
    }

    fn profile(name: &str) -> ProfileProperties {
        ProfileProperties {
            name: name.to_string(),
            version: "1.20.1".to_string(),
            modloader: ModLoader::Fabric,
        }
    }

    fn counting_row(data: InstalledMod) -> (ModSelect, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let mut row = ModSelect::new(data, &paths(), &Lang::default(), Box::new(NoStyle));
        let c = count.clone();
        row.connect_selected(move |_| c.set(c.get() + 1));
        (row, count)
    }

    /// Records every style call
    #[derive(Default)]
    struct RecordingStyle(Rc<RefCell<Vec<String>>>);

    impl RowStyle for RecordingStyle {
        fn set_hovered(&self, hovered: bool) {
            self.0.borrow_mut().push(format!("hovered={}", hovered));
        }
        fn set_selected(&self, selected: bool) {
            self.0.borrow_mut().push(format!("selected={}", selected));
        }
    }

    #[test]
    fn test_managed_mod_row_emits_once() {
        let (mut row, count) = counting_row(managed());
        assert!(row.press());
        assert!(!row.press());
        assert_eq!(count.get(), 1);
        assert!(row.is_selected());
    }

    #[test]
    fn test_custom_mod_row_emits_every_press() {
        let (mut row, count) = counting_row(custom());
        assert!(row.press());
        assert!(row.press());
        assert_eq!(count.get(), 2);
        assert!(!row.is_selected());
    }

    #[test]
    fn test_deselected_row_can_be_selected_again() {
        let (mut row, count) = counting_row(managed());
        row.press();
        row.set_selected(false);
        row.press();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_profile_row_emits_name() {
        let received = Rc::new(RefCell::new(None));
        let mut row = ProfileSelect::new(profile("Pack"), &paths(), &Lang::default(), Box::new(NoStyle));
        let r = received.clone();
        row.connect_selected(move |name: &String| *r.borrow_mut() = Some(name.clone()));

        row.press();
        assert_eq!(received.borrow().as_deref(), Some("Pack"));
    }

    #[test]
    fn test_style_receives_visual_state() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut row = ProfileSelect::new(
            profile("Pack"),
            &paths(),
            &Lang::default(),
            Box::new(RecordingStyle(log.clone())),
        );

        row.set_hovered(true);
        row.press();
        row.press();
        row.set_hovered(false);
        assert!(!row.is_hovered());
        assert_eq!(
            *log.borrow(),
            vec!["hovered=true", "selected=true", "hovered=false"]
        );
    }

    #[test]
    fn test_search_row_emits_result_once() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let result = SearchResultMod {
            id: "P7dR8mSH".to_string(),
            name: "Fabric API".to_string(),
            author: "modmuss50".to_string(),
            icon: PathBuf::from("/nonexistent/icon.png"),
            platform: Platform::Modrinth,
        };
        let mut row = SearchModSelect::new(result, &paths(), &Lang::default(), Box::new(NoStyle));
        assert_eq!(row.view_model().subtitle.as_deref(), Some("by modmuss50"));

        let r = received.clone();
        row.connect_selected(move |m: &SearchResultMod| r.borrow_mut().push(m.id.clone()));
        row.press();
        row.press();
        assert_eq!(*received.borrow(), vec!["P7dR8mSH"]);
    }

    #[test]
    fn test_row_list_keeps_single_highlight() {
        let mut list = RowList::new();
        for name in ["a", "b", "c"] {
            list.push(ProfileSelect::new(profile(name), &paths(), &Lang::default(), Box::new(NoStyle)));
        }

        assert!(list.press(0));
        assert_eq!(list.selected_index(), Some(0));
        assert!(list.press(2));
        assert_eq!(list.selected_index(), Some(2));
        assert!(!list.get(0).unwrap().is_selected());
        assert!(!list.press(2));
        assert!(!list.press(9));
    }

    #[test]
    fn test_custom_press_keeps_managed_highlight() {
        let mut list = RowList::new();
        list.push(ModSelect::new(managed(), &paths(), &Lang::default(), Box::new(NoStyle)));
        list.push(ModSelect::new(custom(), &paths(), &Lang::default(), Box::new(NoStyle)));

        list.press(0);
        assert!(list.press(1));
        assert_eq!(list.selected_index(), Some(0));
    }
}
