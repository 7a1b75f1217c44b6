//! Booking form state: field values, slot options, and status text.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BookingWidget` owns one `RwSignal<BookingState>`. Event handlers call the
//! methods below and act on their return values: a [`SlotRequest`] means
//! "fetch slots", a [`BookingRequest`] means "post this booking", and
//! [`PhoneCheck::Invalid`] means "schedule the phone error to hide".
//!
//! CONCURRENCY
//! ===========
//! Slot responses are tagged with the generation of the request that produced
//! them. Any later request or date change bumps the generation, so a slow
//! response for an old date can never overwrite fresher options.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use crate::config::PhoneErrorPolicy;
use crate::error::ApiError;
use crate::net::types::{AvailableSlotsResponse, BookingOutcome, BookingRequest, BookingResponse};
use crate::util::phone::is_valid_phone;
use crate::util::time_slot::{submission_value, truncate_submission_time};

pub const PLACEHOLDER_LABEL: &str = "Select a time slot";
pub const NO_SLOTS_LABEL: &str = "No slots available";
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required!";

/// Values typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    /// `YYYY-MM-DD` from the date input; empty until picked.
    pub date: String,
    pub selected_slot_label: String,
    /// 24-hour `HH:MM` derived from the selected label.
    pub selected_slot_value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotOptionKind {
    Placeholder,
    NoSlots,
    Slot,
    /// A server label that could not be converted; shown but not selectable.
    Unparseable,
}

/// One `<option>` of the slot selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotOption {
    pub kind: SlotOptionKind,
    pub label: String,
    /// Submission value; empty for everything but [`SlotOptionKind::Slot`].
    pub value: String,
}

impl SlotOption {
    fn placeholder() -> Self {
        Self { kind: SlotOptionKind::Placeholder, label: PLACEHOLDER_LABEL.to_owned(), value: String::new() }
    }

    fn no_slots() -> Self {
        Self { kind: SlotOptionKind::NoSlots, label: NO_SLOTS_LABEL.to_owned(), value: String::new() }
    }

    fn from_label(label: &str) -> Self {
        match submission_value(label) {
            Ok(value) => Self { kind: SlotOptionKind::Slot, label: label.to_owned(), value },
            Err(_) => Self { kind: SlotOptionKind::Unparseable, label: label.to_owned(), value: String::new() },
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.kind, SlotOptionKind::NoSlots | SlotOptionKind::Unparseable)
    }
}

/// Build the selector options for a server slot list: placeholder first, then
/// either one option per label or a single "no slots" entry.
pub fn slot_options(labels: &[String]) -> Vec<SlotOption> {
    let mut options = Vec::with_capacity(labels.len().max(1) + 1);
    options.push(SlotOption::placeholder());
    if labels.is_empty() {
        options.push(SlotOption::no_slots());
    } else {
        options.extend(labels.iter().map(|label| SlotOption::from_label(label)));
    }
    options
}

/// A slot fetch the caller should issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotRequest {
    pub generation: u64,
    pub date: String,
}

/// Result of checking the phone field after a keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhoneCheck {
    Valid,
    /// The error is now visible; the caller must schedule its hide timer.
    Invalid,
}

/// Why a submit click did not produce a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    MissingFields,
    /// The phone error is now visible; the caller must schedule its hide timer.
    InvalidPhone,
    /// A booking is already on its way.
    InFlight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingState {
    pub form: BookingForm,
    pub slot_options: Vec<SlotOption>,
    pub status_message: String,
    pub phone_error_visible: bool,
    pub submitting: bool,
    pub phone_error_policy: PhoneErrorPolicy,
    slot_generation: u64,
    /// The status line currently reports a failed slot load.
    slot_error_shown: bool,
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new(PhoneErrorPolicy::default())
    }
}

impl BookingState {
    pub fn new(phone_error_policy: PhoneErrorPolicy) -> Self {
        Self {
            form: BookingForm::default(),
            slot_options: vec![SlotOption::placeholder()],
            status_message: String::new(),
            phone_error_visible: false,
            submitting: false,
            phone_error_policy,
            slot_generation: 0,
            slot_error_shown: false,
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.form.name = name;
    }

    /// Record a new date. In-flight slot responses for the old date go stale.
    pub fn set_date(&mut self, date: String) {
        if self.form.date != date {
            self.slot_generation += 1;
        }
        self.form.date = date;
    }

    /// Start a slot refresh for the current date; `None` when no date is set.
    pub fn begin_slot_refresh(&mut self) -> Option<SlotRequest> {
        if self.form.date.is_empty() {
            return None;
        }
        self.slot_generation += 1;
        Some(SlotRequest { generation: self.slot_generation, date: self.form.date.clone() })
    }

    /// Apply a slot response. Returns `false` when it was stale and dropped.
    ///
    /// A failure leaves the current options in place and reports the problem
    /// in the status line.
    pub fn apply_slots(
        &mut self,
        request: &SlotRequest,
        result: Result<AvailableSlotsResponse, ApiError>,
    ) -> bool {
        if request.generation != self.slot_generation || request.date != self.form.date {
            return false;
        }
        match result {
            Ok(response) => {
                if response.date.as_deref().is_some_and(|echoed| echoed != request.date) {
                    return false;
                }
                self.slot_options = slot_options(&response.available_slots);
                self.clear_selected_slot();
                if self.slot_error_shown {
                    self.set_status(String::new());
                }
            }
            Err(err) => {
                self.set_status(format!("Could not load available time slots: {err}"));
                self.slot_error_shown = true;
            }
        }
        true
    }

    /// Select the option whose submission value is `value`.
    ///
    /// Values that match no selectable option clear the selection.
    pub fn select_slot(&mut self, value: &str) {
        let selected = self
            .slot_options
            .iter()
            .find(|opt| opt.kind == SlotOptionKind::Slot && opt.value == value);
        match selected {
            Some(opt) => {
                self.form.selected_slot_label = opt.label.clone();
                self.form.selected_slot_value = opt.value.clone();
            }
            None => self.clear_selected_slot(),
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.slot_error_shown = false;
    }

    fn clear_selected_slot(&mut self) {
        self.form.selected_slot_label.clear();
        self.form.selected_slot_value.clear();
    }

    /// Store the phone field and check it.
    pub fn set_phone(&mut self, phone: String) -> PhoneCheck {
        self.form.phone = phone;
        self.check_phone()
    }

    /// Check the phone field. A valid value only hides a visible error under
    /// [`PhoneErrorPolicy::HideOnValid`].
    pub fn check_phone(&mut self) -> PhoneCheck {
        if is_valid_phone(&self.form.phone) {
            if self.phone_error_policy == PhoneErrorPolicy::HideOnValid {
                self.hide_phone_error();
            }
            PhoneCheck::Valid
        } else {
            self.show_phone_error();
            PhoneCheck::Invalid
        }
    }

    pub fn show_phone_error(&mut self) {
        self.phone_error_visible = true;
    }

    /// Called by every hide timer, regardless of which check scheduled it.
    pub fn hide_phone_error(&mut self) {
        self.phone_error_visible = false;
    }

    /// Validate the form and build the booking to post.
    ///
    /// Checks run in order and the first failure wins: empty fields, phone
    /// format, then a booking already in flight.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejection`] when nothing should be sent.
    pub fn prepare_submission(&mut self) -> Result<BookingRequest, SubmitRejection> {
        let name = self.form.name.trim();
        let phone = self.form.phone.trim();
        let date = self.form.date.as_str();
        let time = self.form.selected_slot_value.as_str();

        if name.is_empty() || phone.is_empty() || date.is_empty() || time.is_empty() {
            self.set_status(MISSING_FIELDS_MESSAGE.to_owned());
            return Err(SubmitRejection::MissingFields);
        }
        if !is_valid_phone(phone) {
            self.show_phone_error();
            return Err(SubmitRejection::InvalidPhone);
        }
        if self.submitting {
            return Err(SubmitRejection::InFlight);
        }

        let request = BookingRequest {
            name: name.to_owned(),
            phone: phone.to_owned(),
            date: date.to_owned(),
            time: truncate_submission_time(time),
        };
        self.submitting = true;
        Ok(request)
    }

    /// Apply the booking reply. Returns `true` when slots must be refreshed.
    pub fn apply_booking_result(&mut self, result: Result<BookingResponse, ApiError>) -> bool {
        self.submitting = false;
        match result.map(BookingResponse::outcome) {
            Ok(BookingOutcome::Accepted(message)) => {
                self.set_status(message);
                true
            }
            Ok(BookingOutcome::Rejected(error)) => {
                self.set_status(error);
                false
            }
            Err(err) => {
                self.set_status(format!("Could not send booking: {err}"));
                false
            }
        }
    }

    /// Apply the booking reply and, when it was accepted, start the one slot
    /// refresh that follows it.
    pub fn finish_booking(&mut self, result: Result<BookingResponse, ApiError>) -> Option<SlotRequest> {
        if self.apply_booking_result(result) {
            self.begin_slot_refresh()
        } else {
            None
        }
    }
}
