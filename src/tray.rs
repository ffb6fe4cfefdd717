/// System tray icon with a menu mirroring the panel's context menu.
///
/// The tray runs on its own thread with its own poll loop so menu
/// interaction never blocks, or is blocked by, the panel's event loop.
/// Menu actions are forwarded as `TrayCommand`s over a channel; the panel
/// executes them on the UI thread.
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use crossbeam::channel::{self, Receiver, Sender};
use image::{Rgba, RgbaImage};
use tray_icon::menu::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

use crate::config::Side;
use crate::ipc::TrayCommand;

const ICON_SIZE: u32 = 64;
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Handle owned by the panel. Shutdown is explicit so exit can stop the
/// tray loop before the main window is torn down.
pub struct TrayHandle {
    shutdown: Sender<()>,
    thread: JoinHandle<()>,
}

impl TrayHandle {
    /// Stop the tray loop and wait for the thread to finish.
    pub fn shutdown(self) {
        let _ = self.shutdown.send(());
        if self.thread.join().is_err() {
            tracing::warn!("tray thread panicked during shutdown");
        }
    }
}

/// Spawn the tray thread. `side` only picks the startup icon's arrow
/// direction; the bitmap is not redrawn on later dock changes.
pub fn spawn(side: Side, commands: Sender<TrayCommand>) -> Result<TrayHandle> {
    let (shutdown_tx, shutdown_rx) = channel::bounded(1);
    let thread = thread::Builder::new()
        .name("tray".into())
        .spawn(move || run_tray_loop(side, commands, shutdown_rx))
        .context("failed to spawn tray thread")?;
    Ok(TrayHandle {
        shutdown: shutdown_tx,
        thread,
    })
}

fn run_tray_loop(side: Side, commands: Sender<TrayCommand>, shutdown: Receiver<()>) {
    let tray = match build_tray(side) {
        Ok(tray) => tray,
        Err(err) => {
            tracing::error!(%err, "failed to create tray icon");
            return;
        }
    };

    tracing::info!("tray icon ready");

    loop {
        pump_platform_events();

        if let Ok(event) = MenuEvent::receiver().try_recv() {
            if let Some(command) = tray.command_for(&event.id) {
                tracing::debug!(?command, "tray menu action");
                if commands.send(command).is_err() {
                    // UI side is gone; nothing left to serve.
                    break;
                }
            }
        }

        if shutdown.try_recv().is_ok() {
            tracing::info!("tray shutting down");
            break;
        }

        thread::sleep(POLL_INTERVAL);
    }
}

struct TrayMenu {
    _icon: TrayIcon,
    show_id: MenuId,
    add_id: MenuId,
    dock_left_id: MenuId,
    dock_right_id: MenuId,
    exit_id: MenuId,
}

impl TrayMenu {
    fn command_for(&self, id: &MenuId) -> Option<TrayCommand> {
        if *id == self.show_id {
            Some(TrayCommand::ShowPanel)
        } else if *id == self.add_id {
            Some(TrayCommand::AddShortcut)
        } else if *id == self.dock_left_id {
            Some(TrayCommand::SetSide(Side::Left))
        } else if *id == self.dock_right_id {
            Some(TrayCommand::SetSide(Side::Right))
        } else if *id == self.exit_id {
            Some(TrayCommand::Exit)
        } else {
            None
        }
    }
}

fn build_tray(side: Side) -> Result<TrayMenu> {
    let menu = Menu::new();
    let show = MenuItem::new("Show panel", true, None);
    let add = MenuItem::new("Add shortcut", true, None);
    let dock_left = MenuItem::new("Dock left", true, None);
    let dock_right = MenuItem::new("Dock right", true, None);
    let separator = PredefinedMenuItem::separator();
    let exit = MenuItem::new("Exit", true, None);

    menu.append(&show)
        .map_err(|e| anyhow!("failed to add show item: {e}"))?;
    menu.append(&add)
        .map_err(|e| anyhow!("failed to add add-shortcut item: {e}"))?;
    menu.append(&dock_left)
        .map_err(|e| anyhow!("failed to add dock-left item: {e}"))?;
    menu.append(&dock_right)
        .map_err(|e| anyhow!("failed to add dock-right item: {e}"))?;
    menu.append(&separator)
        .map_err(|e| anyhow!("failed to add separator: {e}"))?;
    menu.append(&exit)
        .map_err(|e| anyhow!("failed to add exit item: {e}"))?;

    let icon = arrow_icon(side)?;
    let tray_icon = TrayIconBuilder::new()
        .with_tooltip("Edgebar - shortcut sidebar")
        .with_icon(icon)
        .with_menu(Box::new(menu))
        .build()
        .map_err(|e| anyhow!("failed to create tray icon: {e}"))?;

    Ok(TrayMenu {
        _icon: tray_icon,
        show_id: show.id().clone(),
        add_id: add.id().clone(),
        dock_left_id: dock_left.id().clone(),
        dock_right_id: dock_right.id().clone(),
        exit_id: exit.id().clone(),
    })
}

fn arrow_icon(side: Side) -> Result<Icon> {
    let image = render_arrow_bitmap(side);
    Icon::from_rgba(image.into_raw(), ICON_SIZE, ICON_SIZE)
        .map_err(|e| anyhow!("failed to build tray icon bitmap: {e:?}"))
}

/// 64x64 brown square with a white arrowhead facing the dock side.
fn render_arrow_bitmap(side: Side) -> RgbaImage {
    let background = Rgba([0x4B, 0x2E, 0x2A, 0xFF]);
    let foreground = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
    let mut image = RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, background);

    let size = ICON_SIZE as i32;
    let (base_x, tip_x) = match side {
        Side::Right => (size / 4, 3 * size / 4),
        Side::Left => (3 * size / 4, size / 4),
    };
    let top = size / 4;
    let bottom = 3 * size / 4;
    let mid = size / 2;
    let span = (bottom - top) / 2;

    // Scanline fill: a vertical base edge at base_x, apex at (tip_x, mid).
    for y in top..=bottom {
        let reach = span - (y - mid).abs();
        let x_end = base_x + (tip_x - base_x) * reach / span;
        let (lo, hi) = if base_x <= x_end {
            (base_x, x_end)
        } else {
            (x_end, base_x)
        };
        for x in lo..=hi {
            image.put_pixel(x as u32, y as u32, foreground);
        }
    }
    image
}

/// Tray events on Windows only arrive while the owning thread pumps its
/// message queue.
#[cfg(windows)]
fn pump_platform_events() {
    use windows::Win32::UI::WindowsAndMessaging::{
        DispatchMessageW, PeekMessageW, TranslateMessage, MSG, PM_REMOVE,
    };

    unsafe {
        let mut msg = MSG::default();
        while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
            TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

#[cfg(not(windows))]
fn pump_platform_events() {}
