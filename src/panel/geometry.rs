//! Window geometry keeping the panel pinned to its screen edge.

use crate::config::Side;
use crate::screen::ScreenSize;

/// Fixed gap above the panel.
pub const TOP_MARGIN: u32 = 20;
/// Total vertical inset; the panel never spans the full screen height so a
/// taskbar-like strip stays reachable.
pub const VERTICAL_INSET: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Rectangle for a panel of `width` pinned to the configured edge.
pub fn panel_rect(side: Side, width: u32, screen: ScreenSize) -> PanelRect {
    let x = match side {
        Side::Left => 0,
        Side::Right => screen.width.saturating_sub(width) as i32,
    };
    PanelRect {
        x,
        y: TOP_MARGIN as i32,
        width,
        height: screen.height.saturating_sub(VERTICAL_INSET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenSize = ScreenSize {
        width: 1920,
        height: 1080,
    };

    #[test]
    fn left_dock_pins_to_x_zero() {
        let rect = panel_rect(Side::Left, 16, SCREEN);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.width, 16);
    }

    #[test]
    fn right_dock_pins_the_right_edge_to_the_screen_edge() {
        let rect = panel_rect(Side::Right, 16, SCREEN);
        assert_eq!(rect.x, 1904);
        assert_eq!(rect.x + rect.width as i32, SCREEN.width as i32);
    }

    #[test]
    fn right_dock_follows_the_growing_width() {
        // Each animation tick widens the panel toward the screen center.
        assert_eq!(panel_rect(Side::Right, 100, SCREEN).x, 1820);
        assert_eq!(panel_rect(Side::Right, 200, SCREEN).x, 1720);
    }

    #[test]
    fn panel_leaves_the_fixed_vertical_margins() {
        let rect = panel_rect(Side::Left, 16, SCREEN);
        assert_eq!(rect.y, 20);
        assert_eq!(rect.height, 1040);
    }

    #[test]
    fn side_flip_at_the_same_width_jumps_to_the_opposite_edge() {
        let width = 16;
        let left = panel_rect(Side::Left, width, SCREEN);
        let right = panel_rect(Side::Right, width, SCREEN);
        assert_eq!(left.x, 0);
        assert_eq!(right.x, 1904);
        assert_eq!(left.width, right.width);
        assert_eq!(left.height, right.height);
    }
}
