//! # booking-widget
//!
//! Leptos + WASM appointment booking widget. A host page calls
//! `init(selector, { apiBaseUrl })`; the widget lists open time slots for a
//! picked date and posts bookings to the configured server.
//!
//! The crate compiles natively without the `csr` feature. In that mode the
//! network layer reports itself unavailable, which keeps all form logic
//! (`state`, `util`, `net` decoding) testable with plain `cargo test`.

pub mod components;
pub mod config;
pub mod error;
#[cfg(feature = "csr")]
pub mod mount;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub use mount::init;
