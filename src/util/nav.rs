//! Mobile navigation menu state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;

/// Where a document click landed, relative to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The hamburger toggle button.
    Toggle,
    /// A link inside the menu.
    NavLink,
    /// Anywhere else inside the menu.
    Menu,
    /// Outside both the menu and the toggle.
    Outside,
}

/// Open/closed state of the collapsible menu. Both the menu and the toggle
/// carry the `active` class while open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Apply one click and return whether the menu is open afterwards.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Toggle => self.open = !self.open,
            ClickTarget::NavLink | ClickTarget::Outside => self.open = false,
            ClickTarget::Menu => {}
        }
        self.open
    }

    #[must_use]
    pub fn active_class(self) -> Option<&'static str> {
        self.open.then_some("active")
    }
}
