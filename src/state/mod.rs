//! Widget state, kept as plain structs so it can be unit tested natively.
//!
//! DESIGN
//! ======
//! Components wrap this state in an `RwSignal` and translate DOM events into
//! method calls. Anything with a side effect (HTTP, timers) is returned to the
//! caller as a value describing what to do next.

pub mod booking;
