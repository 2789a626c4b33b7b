//! # concrete-site
//!
//! Client-side behaviour for the Robotic Concrete marketing site: the contact
//! form submitter, the chat widget controller, and the small page helpers
//! (navigation menu, smooth scroll, header style) that surround them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here touches a real DOM. Controllers talk to the page through the
//! traits in [`view`], and to the remote contact/chat services through
//! [`net::transport::JsonPost`]. A host (browser glue or the terminal preview
//! in `main.rs`) implements the views and forwards UI events.

pub mod config;
pub mod error;
pub mod net;
pub mod services;
pub mod state;
pub mod util;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
