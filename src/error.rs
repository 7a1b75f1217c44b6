//! Error types shared by the widget's network, config, and slot parsing layers.
//!
//! ERROR HANDLING
//! ==============
//! Validation problems never reach these types; they are rendered inline by
//! `state::booking`. Everything here is either surfaced in the status line or
//! returned to the JavaScript caller of `init`.

/// Failures talking to the booking server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with an `{"error": ...}` body.
    #[error("{0}")]
    Rejected(String),

    /// The response body did not match the expected schema.
    #[error("unexpected response (status {status}): {message}")]
    Decode { status: u16, message: String },

    /// Network calls are only wired up in browser builds.
    #[error("network requests are unavailable outside the browser")]
    Unavailable,
}

/// The options object passed to `init` could not be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid widget options: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A slot label did not have the `H[H]:MM AM|PM - H[H]:MM AM|PM` shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotLabelError {
    #[error("slot label has no start time: {0:?}")]
    MissingStart(String),

    #[error("slot start time has no minutes: {0:?}")]
    MissingMinutes(String),

    #[error("slot start hour is not a number: {0:?}")]
    InvalidHour(String),
}
