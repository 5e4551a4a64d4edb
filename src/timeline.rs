// src/timeline.rs
//
// State machine behind the zoomable career timeline. The widget shows three
// chapters; on desktop it starts as an overview diagram and zooms into one
// chapter at a time, on narrow viewports it is always zoomed into exactly one
// chapter. All rendering lives in `components::timeline`; this module only
// tracks state so the transitions stay testable without a DOM.

/// Number of chapters in the timeline diagram.
pub const SECTION_COUNT: u8 = 3;

/// Viewport widths at or below this are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Desktop,
    Mobile,
}

impl DisplayMode {
    pub fn from_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT {
            DisplayMode::Mobile
        } else {
            DisplayMode::Desktop
        }
    }
}

/// Invariants: `current` is always in `1..=SECTION_COUNT`; on mobile `zoomed`
/// is always true. Out-of-range section requests are dropped, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineState {
    mode: DisplayMode,
    current: u8,
    zoomed: bool,
}

impl TimelineState {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            current: 1,
            zoomed: mode == DisplayMode::Mobile,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn current_section(&self) -> u8 {
        self.current
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Whether the Escape router may zoom this widget out. Mobile can never
    /// leave the zoomed state, so only a zoomed desktop widget counts.
    pub fn can_zoom_out(&self) -> bool {
        self.mode == DisplayMode::Desktop && self.zoomed
    }

    /// Arrow keys act on the widget only while it is the active context:
    /// desktop while zoomed, mobile always.
    pub fn accepts_keyboard(&self) -> bool {
        self.mode == DisplayMode::Mobile || self.zoomed
    }

    /// Zoom into section `n`. Returns whether the state changed; requests
    /// outside `1..=SECTION_COUNT` are no-ops.
    pub fn select_section(&mut self, n: u8) -> bool {
        if n < 1 || n > SECTION_COUNT {
            return false;
        }
        if self.zoomed && self.current == n {
            return false;
        }
        self.current = n;
        self.zoomed = true;
        true
    }

    /// Hot-zone clicks on the overview diagram only exist on desktop; a
    /// stray click event on mobile is ignored.
    pub fn hot_zone_click(&mut self, n: u8) -> bool {
        if self.mode == DisplayMode::Mobile {
            return false;
        }
        self.select_section(n)
    }

    pub fn select_next(&mut self) -> bool {
        self.select_section(self.current.saturating_add(1))
    }

    pub fn select_prev(&mut self) -> bool {
        if self.current <= 1 {
            return false;
        }
        self.select_section(self.current - 1)
    }

    /// Return to the overview. Only a zoomed desktop widget can do this;
    /// mobile stays zoomed.
    pub fn zoom_out(&mut self) -> bool {
        if !self.can_zoom_out() {
            return false;
        }
        self.zoomed = false;
        true
    }

    /// Apply a viewport width. Crossing into mobile forces `Zoomed(1)`;
    /// crossing back to desktop returns to the overview, since a section the
    /// user never chose to zoom into should not stay zoomed.
    pub fn handle_viewport_width(&mut self, width: f64) -> bool {
        let mode = DisplayMode::from_width(width);
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        match mode {
            DisplayMode::Mobile => {
                self.current = 1;
                self.zoomed = true;
            }
            DisplayMode::Desktop => {
                self.zoomed = false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_starts_idle() {
        let state = TimelineState::new(DisplayMode::Desktop);
        assert!(!state.is_zoomed());
        assert_eq!(state.current_section(), 1);
    }

    #[test]
    fn mobile_is_always_zoomed() {
        let mut state = TimelineState::new(DisplayMode::Mobile);
        assert!(state.is_zoomed());
        assert!(!state.zoom_out());
        assert!(state.is_zoomed());
        state.select_next();
        assert!(!state.zoom_out());
        assert!(state.is_zoomed());
    }

    #[test]
    fn select_and_zoom_out_on_desktop() {
        let mut state = TimelineState::new(DisplayMode::Desktop);
        assert!(state.select_section(2));
        assert!(state.is_zoomed());
        assert_eq!(state.current_section(), 2);
        assert!(state.zoom_out());
        assert!(!state.is_zoomed());
    }

    #[test]
    fn out_of_range_requests_are_dropped() {
        let mut state = TimelineState::new(DisplayMode::Desktop);
        assert!(!state.select_section(0));
        assert!(!state.select_section(SECTION_COUNT + 1));
        assert!(!state.is_zoomed());
        assert_eq!(state.current_section(), 1);
    }

    #[test]
    fn next_stops_at_last_section() {
        let mut state = TimelineState::new(DisplayMode::Desktop);
        state.select_section(2);
        assert!(state.select_next());
        assert_eq!(state.current_section(), 3);
        assert!(!state.select_next());
        assert_eq!(state.current_section(), 3);
        assert!(state.is_zoomed());
    }

    #[test]
    fn prev_stops_at_first_section() {
        let mut state = TimelineState::new(DisplayMode::Mobile);
        assert!(!state.select_prev());
        assert_eq!(state.current_section(), 1);
    }

    #[test]
    fn hot_zone_clicks_ignored_on_mobile() {
        let mut state = TimelineState::new(DisplayMode::Mobile);
        assert!(!state.hot_zone_click(2));
        assert_eq!(state.current_section(), 1);

        let mut desktop = TimelineState::new(DisplayMode::Desktop);
        assert!(desktop.hot_zone_click(2));
        assert_eq!(desktop.current_section(), 2);
    }

    #[test]
    fn resize_to_mobile_forces_first_section_zoomed() {
        let mut state = TimelineState::new(DisplayMode::Desktop);
        state.select_section(3);
        assert!(state.handle_viewport_width(MOBILE_BREAKPOINT - 100.0));
        assert_eq!(state.mode(), DisplayMode::Mobile);
        assert!(state.is_zoomed());
        assert_eq!(state.current_section(), 1);
    }

    #[test]
    fn resize_back_to_desktop_returns_to_overview() {
        let mut state = TimelineState::new(DisplayMode::Mobile);
        state.select_next();
        assert!(state.handle_viewport_width(MOBILE_BREAKPOINT + 400.0));
        assert_eq!(state.mode(), DisplayMode::Desktop);
        assert!(!state.is_zoomed());
    }

    #[test]
    fn resize_within_same_mode_is_a_no_op() {
        let mut state = TimelineState::new(DisplayMode::Desktop);
        state.select_section(2);
        assert!(!state.handle_viewport_width(MOBILE_BREAKPOINT + 50.0));
        assert!(state.is_zoomed());
        assert_eq!(state.current_section(), 2);
    }

    #[test]
    fn keyboard_gate_follows_mode_and_zoom() {
        let mut desktop = TimelineState::new(DisplayMode::Desktop);
        assert!(!desktop.accepts_keyboard());
        desktop.select_section(1);
        assert!(desktop.accepts_keyboard());

        let mobile = TimelineState::new(DisplayMode::Mobile);
        assert!(mobile.accepts_keyboard());
    }
}
