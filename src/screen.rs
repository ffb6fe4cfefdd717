//! Primary display metrics.

/// Size of the primary display in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

/// Query the primary display.
#[cfg(windows)]
pub fn primary_size() -> ScreenSize {
    use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

    let (width, height) =
        unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
    ScreenSize {
        width: width as u32,
        height: height as u32,
    }
}

/// Off Windows there is no portable query without a live event loop; assume
/// a common desktop resolution.
#[cfg(not(windows))]
pub fn primary_size() -> ScreenSize {
    ScreenSize {
        width: 1920,
        height: 1080,
    }
}
