//! Controllers for the interactive parts of the page.
//!
//! DESIGN
//! ======
//! `contact` and `chat` are independent: they share no state, and each owns
//! its view and its network client. `validation` and `fallback` are pure
//! helpers with no I/O.

pub mod chat;
pub mod contact;
pub mod fallback;
pub mod validation;
