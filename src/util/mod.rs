//! Pure helpers shared by state and components.
//!
//! ARCHITECTURE
//! ============
//! Nothing in here touches the DOM or the network, so every helper is
//! exercised by native unit tests.

pub mod phone;
pub mod time_slot;
