// src/nav.rs
//
// Sidebar state for the navigation coordinator. The hamburger button, the
// page overlay and the panel itself all render from this one flag, so they
// can never disagree about whether the sidebar is open.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click: open when closed, close when open. Returns the new
    /// state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Overlay clicks only ever close. Returns whether anything changed.
    pub fn overlay_click(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Any link inside the sidebar closes it, regardless of which one.
    pub fn link_click(&mut self) -> bool {
        self.overlay_click()
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamburger_toggles_sidebar_and_overlay_together() {
        let mut sidebar = SidebarState::default();
        assert!(!sidebar.is_open());

        // Open: the panel and the overlay both report active...
        assert!(sidebar.toggle());
        assert!(sidebar.is_open());

        // ...and an overlay click away from the panel closes both.
        assert!(sidebar.overlay_click());
        assert!(!sidebar.is_open());
    }

    #[test]
    fn overlay_click_on_closed_sidebar_changes_nothing() {
        let mut sidebar = SidebarState::default();
        assert!(!sidebar.overlay_click());
        assert!(!sidebar.is_open());
    }

    #[test]
    fn any_link_click_closes_the_sidebar() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle();
        assert!(sidebar.link_click());
        assert!(!sidebar.is_open());
        // A second click is a no-op.
        assert!(!sidebar.link_click());
    }
}
