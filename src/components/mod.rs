//! UI components.
//!
//! ARCHITECTURE
//! ============
//! Components translate DOM events into `state` calls and run whatever side
//! effect the state asks for; they hold no booking logic of their own.

pub mod booking_widget;
