//! Page helpers shared across the site script.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions and small state holders for the page chrome (menu, scroll,
//! header, portfolio, placeholders) plus timestamp formatting. None of them
//! touch the network.

pub mod nav;
pub mod placeholder;
pub mod portfolio;
pub mod scroll;
pub mod timestamp;
