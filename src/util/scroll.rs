//! Scroll-driven page behaviour: anchor scrolling, header style, and the
//! reveal-on-scroll observer options.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use std::time::Duration;

use crate::config::SiteConfig;

/// Scroll offset past which the header switches to its raised style.
pub const HEADER_RAISE_THRESHOLD: f64 = 100.0;

/// Share of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Elements that fade in when scrolled into view.
pub const REVEAL_SELECTORS: &[&str] = &[".service-card", ".benefit-card", ".step", ".testimonial", ".portfolio-item"];

/// Id of the in-page target for `#anchor` links. Other hrefs are left to the
/// browser.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// A smooth scroll the host should perform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPlan {
    pub top: f64,
    pub duration: Duration,
}

/// Scroll so the target sits just below the fixed header.
#[must_use]
pub fn plan_anchor_scroll(element_top: f64, header_height: f64, config: &SiteConfig) -> ScrollPlan {
    ScrollPlan { top: (element_top - header_height).max(0.0), duration: config.scroll_duration }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background_color: &'static str,
    pub box_shadow: &'static str,
}

const HEADER_RESTING: HeaderStyle =
    HeaderStyle { background_color: "rgba(255, 255, 255, 0.95)", box_shadow: "0 1px 3px rgba(0, 0, 0, 0.05)" };

const HEADER_RAISED: HeaderStyle =
    HeaderStyle { background_color: "rgba(255, 255, 255, 0.98)", box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)" };

#[must_use]
pub fn header_style(scroll_y: f64) -> HeaderStyle {
    if scroll_y > HEADER_RAISE_THRESHOLD { HEADER_RAISED } else { HEADER_RESTING }
}

/// `rootMargin` for the reveal observer: shrink the viewport's bottom edge by
/// the configured offset.
#[must_use]
pub fn reveal_root_margin(config: &SiteConfig) -> String {
    format!("0px 0px -{}px 0px", config.animation_offset)
}
