//! Client-side state for the two interactive features.
//!
//! DESIGN
//! ======
//! State is split by feature (`chat`, `form`) and holds plain data only. The
//! controllers in `services` own the state and mirror changes into a view.

pub mod chat;
pub mod form;
