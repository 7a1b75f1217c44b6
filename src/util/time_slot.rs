//! Conversion between slot labels and 24-hour submission values.
//!
//! The server lists slots as display labels such as `"10:30 AM - 11:00 AM"`
//! but expects bookings as `"HH:MM"`. Only the start of the range matters.

#[cfg(test)]
#[path = "time_slot_test.rs"]
mod time_slot_test;

use crate::error::SlotLabelError;

/// Separator between the start and end of a slot label.
pub const RANGE_SEPARATOR: &str = " - ";

/// Length of a `"HH:MM"` submission value.
pub const SUBMISSION_TIME_LEN: usize = 5;

/// Convert a slot label into the `"HH:MM"` value submitted for it.
///
/// `PM` hours other than 12 gain 12, `12 AM` becomes `00`, and any other
/// period (or none) leaves the hour alone. Minutes are copied verbatim.
///
/// # Errors
///
/// Returns [`SlotLabelError`] when the label has no start time, the start has
/// no `:` separated minutes, or the hour is not an integer.
pub fn submission_value(label: &str) -> Result<String, SlotLabelError> {
    let start = label.split(RANGE_SEPARATOR).next().unwrap_or_default().trim();
    if start.is_empty() {
        return Err(SlotLabelError::MissingStart(label.to_owned()));
    }

    let mut words = start.split(' ');
    let hour_minute = words.next().unwrap_or_default();
    let period = words.next().unwrap_or_default();

    let mut clock = hour_minute.split(':');
    let hours = clock.next().unwrap_or_default();
    let Some(minutes) = clock.next() else {
        return Err(SlotLabelError::MissingMinutes(label.to_owned()));
    };
    let hours: u32 = hours
        .trim()
        .parse()
        .map_err(|_| SlotLabelError::InvalidHour(label.to_owned()))?;

    let hours = match period {
        "PM" if hours != 12 => hours
            .checked_add(12)
            .ok_or_else(|| SlotLabelError::InvalidHour(label.to_owned()))?,
        "AM" if hours == 12 => 0,
        _ => hours,
    };

    Ok(format!("{hours:02}:{minutes}"))
}

/// Cut a stored slot value down to `"HH:MM"`, dropping any `":SS"` suffix.
pub fn truncate_submission_time(value: &str) -> String {
    value.chars().take(SUBMISSION_TIME_LEN).collect()
}
