//! Hands shortcut paths to the operating system.

use std::path::Path;

/// True when the path names a Windows shell link (`.lnk`).
fn is_shell_link(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("lnk"))
        .unwrap_or(false)
}

/// Open `path` the way a double-click would.
///
/// Shell links go through `Start-Process` so the shell resolves their
/// target, working directory and arguments; everything else uses the OS
/// default-open handler. Failures are logged and swallowed; a broken
/// shortcut must not take the panel down.
pub fn launch(path: &Path) {
    tracing::info!(?path, "launching shortcut");
    if is_shell_link(path) {
        launch_shell_link(path);
    } else if let Err(err) = open::that(path) {
        tracing::error!(%err, ?path, "failed to open shortcut");
    }
}

#[cfg(windows)]
fn launch_shell_link(path: &Path) {
    use std::os::windows::process::CommandExt;
    use std::process::Command;

    const CREATE_NO_WINDOW: u32 = 0x08000000;

    let command = format!("Start-Process '{}'", path.display());
    let spawned = Command::new("powershell")
        .args(["-NoProfile", "-Command", &command])
        .creation_flags(CREATE_NO_WINDOW)
        .spawn();
    if let Err(err) = spawned {
        tracing::error!(%err, ?path, "failed to start shell link");
    }
}

#[cfg(not(windows))]
fn launch_shell_link(path: &Path) {
    // No link semantics to resolve off Windows; default-open is the closest
    // equivalent.
    if let Err(err) = open::that(path) {
        tracing::error!(%err, ?path, "failed to open shortcut");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_shell_links_case_insensitively() {
        assert!(is_shell_link(Path::new("C:/apps/Tool.lnk")));
        assert!(is_shell_link(Path::new("game.LNK")));
        assert!(!is_shell_link(Path::new("tool.exe")));
        assert!(!is_shell_link(Path::new("archive.lnk.txt")));
        assert!(!is_shell_link(Path::new("lnk")));
    }
}
