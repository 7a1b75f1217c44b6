//! Wire DTOs for the slot lookup and booking endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `GET /available-slots/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AvailableSlotsResponse {
    /// Slot labels in server order, e.g. `"10:30 AM - 11:00 AM"`.
    pub available_slots: Vec<String>,
    /// Date the server computed the slots for, when echoed.
    #[serde(default)]
    pub date: Option<String>,
}

/// `{"error": ...}` body the server sends for rejected requests.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `POST /book-appointment/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    /// Exactly ten digits.
    pub phone: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, 24-hour.
    pub time: String,
}

/// Reply to a booking request. The server sets one of the two fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BookingResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// How the widget reads a [`BookingResponse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The booking was accepted; carries the confirmation text.
    Accepted(String),
    /// The server refused; carries its reason (possibly empty).
    Rejected(String),
}

impl BookingResponse {
    /// A non-empty `message` wins; anything else counts as a rejection.
    pub fn outcome(self) -> BookingOutcome {
        match self.message {
            Some(message) if !message.is_empty() => BookingOutcome::Accepted(message),
            _ => BookingOutcome::Rejected(self.error.unwrap_or_default()),
        }
    }

    #[cfg(any(test, feature = "csr"))]
    pub(crate) fn is_empty(&self) -> bool {
        self.message.is_none() && self.error.is_none()
    }
}
