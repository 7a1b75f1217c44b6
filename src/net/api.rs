//! HTTP calls to the booking server.
//!
//! Browser builds (`csr`) send real requests through `gloo-net`. Native builds
//! return [`ApiError::Unavailable`] so state and components stay testable
//! without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Bodies are read as text and decoded here rather than by `gloo-net`, so a
//! server `{"error": ...}` reply is reported as [`ApiError::Rejected`] instead
//! of an opaque parse failure. Booking replies are decoded whatever the HTTP
//! status, since the server refuses bookings with a 400 and an error body.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AvailableSlotsResponse, BookingRequest, BookingResponse};
use crate::error::ApiError;
#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;

#[cfg(any(test, feature = "csr"))]
fn available_slots_endpoint(api_base_url: &str, date: &str) -> String {
    format!("{api_base_url}/available-slots/?date={date}")
}

#[cfg(any(test, feature = "csr"))]
fn book_appointment_endpoint(api_base_url: &str) -> String {
    format!("{api_base_url}/book-appointment/")
}

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "csr"))]
fn decode_available_slots(status: u16, body: &str) -> Result<AvailableSlotsResponse, ApiError> {
    match serde_json::from_str::<AvailableSlotsResponse>(body) {
        Ok(parsed) => Ok(parsed),
        Err(parse_err) => match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error }) => Err(ApiError::Rejected(error)),
            Err(_) => Err(ApiError::Decode { status, message: parse_err.to_string() }),
        },
    }
}

#[cfg(any(test, feature = "csr"))]
fn decode_booking_response(status: u16, body: &str) -> Result<BookingResponse, ApiError> {
    let parsed: BookingResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode { status, message: e.to_string() })?;
    if parsed.is_empty() && !is_success(status) {
        return Err(ApiError::Decode { status, message: "body has neither message nor error".to_owned() });
    }
    Ok(parsed)
}

/// Fetch the open slots for `date` from `{api_base_url}/available-slots/`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails, the server rejects the date, or
/// the body is not a slot list.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn fetch_available_slots(api_base_url: &str, date: &str) -> Result<AvailableSlotsResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = available_slots_endpoint(api_base_url, date);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_available_slots(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Submit a booking to `{api_base_url}/book-appointment/`.
///
/// A decoded reply may still be a business rejection; see
/// [`BookingResponse::outcome`].
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the reply cannot be decoded.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn book_appointment(api_base_url: &str, request: &BookingRequest) -> Result<BookingResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = book_appointment_endpoint(api_base_url);
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_booking_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}
