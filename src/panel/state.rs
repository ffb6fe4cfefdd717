//! Expand/collapse state machine for the edge panel.
//!
//! The "animation" is bounded iteration: a repeating timer advances
//! `current_width` one fixed step per tick until it snaps onto the target
//! width and the phase settles.

/// Pixels moved per animation tick.
pub const ANIMATION_STEP: u32 = 6;
/// Milliseconds between animation ticks.
pub const TICK_MILLIS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

#[derive(Debug, Clone)]
pub struct PanelState {
    collapsed_width: u32,
    expanded_width: u32,
    current_width: u32,
    phase: Phase,
}

impl PanelState {
    /// A freshly started panel sits collapsed.
    pub fn new(collapsed_width: u32, expanded_width: u32) -> Self {
        let expanded_width = expanded_width.max(collapsed_width);
        PanelState {
            collapsed_width,
            expanded_width,
            current_width: collapsed_width,
            phase: Phase::Collapsed,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_width(&self) -> u32 {
        self.current_width
    }

    pub fn collapsed_width(&self) -> u32 {
        self.collapsed_width
    }

    pub fn expanded_width(&self) -> u32 {
        self.expanded_width
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Expanding | Phase::Collapsing)
    }

    /// Width the current phase is heading toward.
    pub fn target_width(&self) -> u32 {
        match self.phase {
            Phase::Collapsed | Phase::Collapsing => self.collapsed_width,
            Phase::Expanded | Phase::Expanding => self.expanded_width,
        }
    }

    /// Handle a tab click. Returns `true` when a new animation starts;
    /// clicks while one is already running are ignored.
    pub fn toggle(&mut self) -> bool {
        let next = match self.phase {
            Phase::Collapsed => Phase::Expanding,
            Phase::Expanded => Phase::Collapsing,
            Phase::Expanding | Phase::Collapsing => {
                tracing::debug!(phase = ?self.phase, "toggle ignored while animating");
                return false;
            }
        };
        tracing::debug!(from = ?self.phase, to = ?next, "panel toggled");
        self.phase = next;
        true
    }

    /// Advance one animation tick. Once the remaining distance is smaller
    /// than a full step the width snaps exactly onto the target and the
    /// phase settles.
    pub fn tick(&mut self) -> u32 {
        let target = self.target_width();
        if self.current_width.abs_diff(target) < ANIMATION_STEP {
            self.current_width = target;
        } else if self.current_width < target {
            self.current_width += ANIMATION_STEP;
        } else {
            self.current_width -= ANIMATION_STEP;
        }

        if self.current_width == target {
            self.phase = match self.phase {
                Phase::Expanding => Phase::Expanded,
                Phase::Collapsing => Phase::Collapsed,
                settled => settled,
            };
        }
        self.current_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_rest(panel: &mut PanelState) -> u32 {
        let mut ticks = 0;
        while panel.is_animating() {
            panel.tick();
            ticks += 1;
            assert!(ticks <= 1000, "animation never settled");
        }
        ticks
    }

    #[test]
    fn expand_takes_exactly_the_documented_tick_count() {
        // (200 - 16) / 6 = 30.67 -> 31 ticks, the last one snapping to 200.
        let mut panel = PanelState::new(16, 200);
        assert!(panel.toggle());

        let mut ticks = 0;
        let mut previous = panel.current_width();
        while panel.is_animating() {
            let width = panel.tick();
            assert!(width > previous, "width must move strictly toward the target");
            previous = width;
            ticks += 1;
        }

        assert_eq!(ticks, 31);
        assert_eq!(panel.current_width(), 200);
        assert_eq!(panel.phase(), Phase::Expanded);
    }

    #[test]
    fn exact_step_multiple_settles_on_the_final_step() {
        // 186 / 6 = 31 whole steps, no trailing snap tick.
        let mut panel = PanelState::new(16, 202);
        panel.toggle();
        assert_eq!(run_to_rest(&mut panel), 31);
        assert_eq!(panel.current_width(), 202);
    }

    #[test]
    fn collapse_returns_monotonically_to_the_collapsed_width() {
        let mut panel = PanelState::new(16, 200);
        panel.toggle();
        run_to_rest(&mut panel);

        assert!(panel.toggle());
        assert_eq!(panel.phase(), Phase::Collapsing);
        let mut previous = panel.current_width();
        while panel.is_animating() {
            let width = panel.tick();
            assert!(width < previous, "width must shrink every tick");
            previous = width;
        }
        assert_eq!(panel.current_width(), 16);
        assert_eq!(panel.phase(), Phase::Collapsed);
    }

    #[test]
    fn toggle_is_ignored_while_animating() {
        let mut panel = PanelState::new(16, 200);
        assert!(panel.toggle());
        panel.tick();

        assert!(!panel.toggle());
        assert_eq!(panel.phase(), Phase::Expanding);

        run_to_rest(&mut panel);
        assert!(panel.toggle());
        assert_eq!(panel.phase(), Phase::Collapsing);
    }

    #[test]
    fn equal_widths_settle_in_one_tick() {
        let mut panel = PanelState::new(16, 16);
        assert!(panel.toggle());
        panel.tick();
        assert_eq!(panel.phase(), Phase::Expanded);
        assert_eq!(panel.current_width(), 16);
    }

    #[test]
    fn widths_stay_inside_the_configured_bounds() {
        let mut panel = PanelState::new(10, 47);
        panel.toggle();
        while panel.is_animating() {
            let width = panel.tick();
            assert!((10..=47).contains(&width));
        }
        panel.toggle();
        while panel.is_animating() {
            let width = panel.tick();
            assert!((10..=47).contains(&width));
        }
        assert_eq!(panel.current_width(), 10);
    }
}
