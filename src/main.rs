#![windows_subsystem = "windows"]

use anyhow::{Context, Result};
use iced::Application;

use edgebar::config;
use edgebar::ipc::TrayCommand;
use edgebar::panel::{self, Panel, PanelFlags};
use edgebar::screen;
use edgebar::shortcuts::ShortcutStore;
use edgebar::tray;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::load_config();
    let shortcuts =
        ShortcutStore::open_default().context("failed to prepare the shortcut store")?;
    let screen = screen::primary_size();

    tracing::info!(
        side = ?config.side,
        shortcuts = shortcuts.entries().len(),
        ?screen,
        "starting edgebar"
    );

    let (tray_tx, tray_rx) = crossbeam::channel::unbounded::<TrayCommand>();
    let tray = if config.show_tray {
        Some(tray::spawn(config.side, tray_tx).context("failed to start tray thread")?)
    } else {
        None
    };

    let window = panel::window_settings(&config, screen);
    let mut settings = iced::Settings::with_flags(PanelFlags {
        config,
        shortcuts,
        screen,
        tray,
        tray_commands: tray_rx,
    });
    settings.window = window;

    Panel::run(settings).context("panel event loop failed")
}
