//! Client-side phone number check.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Inline message shown next to the phone field.
pub const PHONE_ERROR_TEXT: &str = "Phone number must be exactly 10 digits!";

/// How long the phone error stays visible after each failed check.
pub const PHONE_ERROR_HIDE_MS: u32 = 3000;

/// True when the trimmed input is exactly ten ASCII digits.
pub fn is_valid_phone(input: &str) -> bool {
    let phone = input.trim();
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}
