use super::*;

#[test]
fn is_valid_phone_accepts_ten_digits() {
    assert!(is_valid_phone("1234567890"));
}

#[test]
fn is_valid_phone_trims_surrounding_whitespace() {
    assert!(is_valid_phone("  1234567890\t"));
}

#[test]
fn is_valid_phone_rejects_short_and_long_numbers() {
    assert!(!is_valid_phone("12345"));
    assert!(!is_valid_phone("12345678901"));
    assert!(!is_valid_phone(""));
}

#[test]
fn is_valid_phone_rejects_separators() {
    assert!(!is_valid_phone("123-456-7890"));
    assert!(!is_valid_phone("123 456 789"));
    assert!(!is_valid_phone("+123456789"));
}

#[test]
fn is_valid_phone_rejects_non_ascii_digits() {
    // Arabic-Indic digits are numeric but not ASCII.
    assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
}
