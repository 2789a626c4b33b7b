//! Networking for the contact and chat endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` performs a bearer-authorized JSON POST, `contact` and `chat`
//! bind it to their endpoints, and `types` defines the wire schema.

pub mod chat;
pub mod contact;
pub mod transport;
pub mod types;
