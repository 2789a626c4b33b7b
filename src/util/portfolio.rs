//! Portfolio card overlay, slid in and out by clicking the card.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPosition {
    #[default]
    Hidden,
    Shown,
}

impl OverlayPosition {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    /// CSS `transform` value for the overlay.
    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Hidden => "translateY(100%)",
            Self::Shown => "translateY(0px)",
        }
    }
}
