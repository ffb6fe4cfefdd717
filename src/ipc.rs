/// Commands marshaled from the tray thread onto the panel's update loop.
use crate::config::Side;

/// Tray menu actions. The tray thread only ever enqueues these; the panel
/// drains the queue and executes them on the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayCommand {
    /// Expand the panel if it is collapsed.
    ShowPanel,
    /// Open the add-shortcut file dialog.
    AddShortcut,
    /// Re-dock the panel to the given edge.
    SetSide(Side),
    /// Quit the application.
    Exit,
}
