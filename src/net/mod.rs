//! Networking for the two booking endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and decodes bodies; `types` defines the wire
//! schema shared with the booking server.

pub mod api;
pub mod types;
