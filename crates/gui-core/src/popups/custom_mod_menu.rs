// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! Remove/rename menu for a custom mod file

use std::path::Path;

use modman_common::{remove_mod_file, rename_mod_file, CustomMod, Error, Result};
use tracing::info;

use super::PopupOutcome;
use crate::events::{Confirmation, PopupState, Signal};

pub struct CustomModMenu {
    mod_file: CustomMod,
    state: PopupState,
    need_refresh: Signal<()>,
}

impl CustomModMenu {
    pub fn new(mod_file: CustomMod) -> Self {
        Self {
            mod_file,
            state: PopupState::Open,
            need_refresh: Signal::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.mod_file.file_name
    }

    pub fn path(&self) -> &Path {
        &self.mod_file.path
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PopupState::Open
    }

    pub fn close(&mut self) {
        self.state = PopupState::Closed;
    }

    /// Register a listener told to reload the mod list
    pub fn connect_need_refresh<F>(&mut self, f: F)
    where
        F: Fn(&()) + 'static,
    {
        self.need_refresh.connect(f);
    }

    /// Delete the mod file once the user confirmed
    pub fn remove_mod(&mut self, confirmation: Confirmation) -> Result<PopupOutcome> {
        if confirmation == Confirmation::No {
            return Ok(PopupOutcome::Cancelled);
        }

        remove_mod_file(&self.mod_file.path)?;
        info!("Removed custom mod {}", self.mod_file.file_name);

        self.need_refresh.emit(&());
        self.close();
        Ok(PopupOutcome::Completed)
    }

    /// Rename the mod file to the prompted name; `None` means the prompt was cancelled
    pub fn rename_mod(&mut self, answer: Option<&str>) -> Result<PopupOutcome> {
        let Some(new_name) = answer else {
            return Ok(PopupOutcome::Cancelled);
        };

        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(Error::ModNameEmpty);
        }

        let target = rename_mod_file(&self.mod_file.path, new_name)?;
        info!(
            "Renamed custom mod {} to {}",
            self.mod_file.file_name,
            target.display()
        );

        self.need_refresh.emit(&());
        self.close();
        Ok(PopupOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn setup() -> (TempDir, CustomModMenu, Rc<Cell<u32>>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.jar");
        fs::write(&path, b"jar").unwrap();

        let mut menu = CustomModMenu::new(CustomMod {
            file_name: "old.jar".to_string(),
            path,
        });
        let refreshes = Rc::new(Cell::new(0));
        let r = refreshes.clone();
        menu.connect_need_refresh(move |_| r.set(r.get() + 1));
        (dir, menu, refreshes)
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let (dir, mut menu, refreshes) = setup();

        assert_eq!(menu.remove_mod(Confirmation::No).unwrap(), PopupOutcome::Cancelled);
        assert!(dir.path().join("old.jar").exists());
        assert!(menu.is_open());

        assert_eq!(menu.remove_mod(Confirmation::Yes).unwrap(), PopupOutcome::Completed);
        assert!(!dir.path().join("old.jar").exists());
        assert_eq!(refreshes.get(), 1);
        assert_eq!(menu.state(), PopupState::Closed);
    }

    #[test]
    fn test_rename_collision_rejected() {
        let (dir, mut menu, refreshes) = setup();
        fs::write(dir.path().join("new.jar"), b"other").unwrap();

        assert!(matches!(menu.rename_mod(Some("new")), Err(Error::ModExists(_))));
        assert!(dir.path().join("old.jar").exists());
        assert_eq!(refreshes.get(), 0);
        assert!(menu.is_open());
    }

    #[test]
    fn test_rename_keeps_extension() {
        let (dir, mut menu, refreshes) = setup();

        assert_eq!(menu.rename_mod(Some("fresh")).unwrap(), PopupOutcome::Completed);
        assert!(dir.path().join("fresh.jar").exists());
        assert!(!dir.path().join("old.jar").exists());
        assert_eq!(refreshes.get(), 1);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_rename_to_path_rejected() {
        let (dir, mut menu, refreshes) = setup();

        assert!(matches!(menu.rename_mod(Some("../x")), Err(Error::ModNameInvalid(_))));
        assert!(matches!(menu.rename_mod(Some(" .. ")), Err(Error::ModNameInvalid(_))));
        assert!(dir.path().join("old.jar").exists());
        assert!(!dir.path().parent().unwrap().join("x.jar").exists());
        assert_eq!(refreshes.get(), 0);
        assert!(menu.is_open());
    }

    #[test]
    fn test_rename_empty_or_cancelled() {
        let (_dir, mut menu, refreshes) = setup();

        assert!(matches!(menu.rename_mod(Some("  ")), Err(Error::ModNameEmpty)));
        assert_eq!(menu.rename_mod(None).unwrap(), PopupOutcome::Cancelled);
        assert_eq!(refreshes.get(), 0);
        assert!(menu.is_open());
    }
}
