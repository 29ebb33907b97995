// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Main application window

use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use modman_common::{McVersionLister, VersionManifest};
use modman_gui_core::{
    AppConfig, AppCore, GuiEvent, InstalledMod, Lang, Paths, ProfileProperties, RowList,
};
use tracing::{info, warn};

use super::{add_profile_dialog, configure_profile_dialog, event_handler, mods_list, profiles_list};

/// Shared application state
pub struct AppState {
    // Business logic (from gui-core) - framework-agnostic
    pub core: RefCell<AppCore>,
    pub config: AppConfig,
    pub paths: Paths,
    pub lang: Lang,
    /// Replaced once the version manifest has been downloaded
    pub lister: RefCell<Rc<dyn McVersionLister>>,

    // GTK-specific UI state below
    pub window: RefCell<Option<adw::ApplicationWindow>>,
    pub profile_list: RefCell<Option<gtk4::ListBox>>,
    pub mod_list: RefCell<Option<gtk4::ListBox>>,
    pub configure_button: RefCell<Option<gtk4::Button>>,
    pub profile_rows: RefCell<RowList<ProfileProperties>>,
    pub mod_rows: RefCell<RowList<InstalledMod>>,
}

impl AppState {
    fn new() -> Rc<Self> {
        let config = match Self::load_config() {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default configuration: {:#}", e);
                AppConfig::default()
            }
        };
        let lang = Self::load_lang(&config);
        let paths = config.paths();

        let lister: Rc<dyn McVersionLister> = Rc::new(VersionManifest::default());

        Rc::new(Self {
            core: RefCell::new(AppCore::new(paths.clone())),
            config,
            paths,
            lang,
            lister: RefCell::new(lister),
            window: RefCell::new(None),
            profile_list: RefCell::new(None),
            mod_list: RefCell::new(None),
            configure_button: RefCell::new(None),
            profile_rows: RefCell::new(RowList::new()),
            mod_rows: RefCell::new(RowList::new()),
        })
    }

    fn load_config() -> anyhow::Result<AppConfig> {
        let config = AppConfig::load().context("Failed to load configuration")?;
        config.ensure_directories()?;
        Ok(config)
    }

    fn load_lang(config: &AppConfig) -> Lang {
        match &config.language_file {
            Some(path) => Lang::load(path).unwrap_or_else(|e| {
                warn!("Falling back to English: {:#}", e);
                Lang::default()
            }),
            None => Lang::default(),
        }
    }

    /// Localized string
    pub fn tr(&self, key: &str) -> String {
        self.lang.get(key)
    }

    pub fn parent_window(&self) -> Option<adw::ApplicationWindow> {
        self.window.borrow().clone()
    }
}

/// Build the main application window
pub fn build(app: &adw::Application) -> adw::ApplicationWindow {
    let state = AppState::new();

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Minecraft Mod Manager")
        .default_width(1000)
        .default_height(650)
        .build();

    state.window.replace(Some(window.clone()));

    let toolbar_view = adw::ToolbarView::new();
    let header = adw::HeaderBar::new();

    let add_button = gtk4::Button::builder()
        .icon_name("list-add-symbolic")
        .tooltip_text(state.tr("addProfile"))
        .build();
    {
        let state = state.clone();
        add_button.connect_clicked(move |_| {
            add_profile_dialog::show(&state);
        });
    }
    header.pack_start(&add_button);

    let configure_button = gtk4::Button::builder()
        .icon_name("emblem-system-symbolic")
        .tooltip_text(state.tr("configureProfile"))
        .sensitive(false)
        .build();
    {
        let state = state.clone();
        configure_button.connect_clicked(move |_| {
            let selected = state.core.borrow().selected_profile.clone();
            if let Some(name) = selected {
                configure_profile_dialog::show(&state, &name);
            }
        });
    }
    header.pack_start(&configure_button);
    state.configure_button.replace(Some(configure_button));

    toolbar_view.add_top_bar(&header);

    // Profiles on the left, mods of the selected profile on the right
    let panes = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);

    let profiles_pane = profiles_list::create(state.clone());
    profiles_pane.set_width_request(300);
    panes.append(&profiles_pane);

    panes.append(&gtk4::Separator::new(gtk4::Orientation::Vertical));

    let mods_pane = mods_list::create(state.clone());
    mods_pane.set_hexpand(true);
    panes.append(&mods_pane);

    toolbar_view.set_content(Some(&panes));
    window.set_content(Some(&toolbar_view));

    event_handler::handle(&state, GuiEvent::ProfileListRefresh);
    start_manifest_fetch(state.clone());

    window
}

/// Download the Minecraft version list in the background
fn start_manifest_fetch(state: Rc<AppState>) {
    glib::MainContext::default().spawn_local(async move {
        let client = match reqwest::Client::builder().build() {
            Ok(client) => client,
            Err(e) => {
                warn!("Failed to create HTTP client: {}", e);
                return;
            }
        };

        let url = state.config.version_manifest_url.clone();
        let cache = state.paths.version_manifest_cache();
        match VersionManifest::fetch_or_cached(&client, &url, &cache).await {
            Ok(manifest) => {
                info!("Loaded {} Minecraft versions", manifest.versions.len());
                state.lister.replace(Rc::new(manifest));
            }
            Err(e) => warn!("Minecraft version list unavailable: {}", e),
        }
    });
}
