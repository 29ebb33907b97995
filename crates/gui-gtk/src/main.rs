// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Minecraft Mod Manager - GUI Application
// GTK4 + libadwaita interface for managing Minecraft profiles and mods

use gtk4::prelude::*;
use libadwaita as adw;
use tracing::error;

mod ui;

const APP_ID: &str = "io.github.mc-mod-manager";

fn main() -> glib::ExitCode {
    // Initialize tracing subscriber for logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "modman_gtk=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Tokio runtime for the version manifest download
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create Tokio runtime: {}", e);
            return glib::ExitCode::FAILURE;
        }
    };

    // Enter the runtime context so async operations work
    let _guard = runtime.enter();

    if let Err(e) = adw::init() {
        error!("Failed to initialize libadwaita: {}", e);
        return glib::ExitCode::FAILURE;
    }

    let app = adw::Application::builder()
        .application_id(APP_ID)
        .build();

    app.connect_activate(|app| {
        ui::style::load();
        let window = ui::window::build(app);
        window.present();
    });

    app.run()
}
