//! The booking form: date picker, slot selector, contact fields, status line.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by `mount::init` into a host-page container. Three bindings drive
//! it: date change refreshes slots, phone input re-checks the number, and the
//! submit button posts the booking. Network calls and the phone-error timer
//! only exist in browser (`csr`) builds.

#[cfg(test)]
#[path = "booking_widget_test.rs"]
mod booking_widget_test;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::state::booking::{BookingState, PhoneCheck, SlotOption, SlotRequest, SubmitRejection};
use crate::util::phone::PHONE_ERROR_TEXT;

const TITLE: &str = "Book an Appointment";
const SUBMIT_LABEL: &str = "Book Now";

fn phone_error_display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

fn option_class(option: &SlotOption) -> &'static str {
    if option.is_disabled() {
        "booking-widget__slot booking-widget__slot--disabled"
    } else {
        "booking-widget__slot"
    }
}

/// Booking form bound to one widget configuration.
#[component]
pub fn BookingWidget(config: WidgetConfig) -> impl IntoView {
    let state = RwSignal::new(BookingState::new(config.phone_error_policy));
    let config = StoredValue::new(config);

    let schedule_phone_error_hide = move || {
        #[cfg(feature = "csr")]
        gloo_timers::callback::Timeout::new(crate::util::phone::PHONE_ERROR_HIDE_MS, move || {
            state.try_update(BookingState::hide_phone_error);
        })
        .forget();
    };

    let fetch_slots = move |request: SlotRequest| {
        let api_base_url = config.with_value(|c| c.api_base_url.clone());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_available_slots(&api_base_url, &request.date).await;
            if let Err(e) = &result {
                leptos::logging::warn!("fetching slots for {} failed: {e}", request.date);
            }
            let applied = state.try_update(|s| s.apply_slots(&request, result)).unwrap_or(false);
            if !applied {
                leptos::logging::log!("dropped stale slot response for {}", request.date);
            }
        });
        #[cfg(not(feature = "csr"))]
        leptos::logging::log!("slot refresh for {} needs a browser ({api_base_url})", request.date);
    };

    let refresh_slots = move || {
        if let Some(request) = state.try_update(BookingState::begin_slot_refresh).flatten() {
            fetch_slots(request);
        }
    };

    let on_date_change = move |ev: leptos::ev::Event| {
        let date = event_target_value(&ev);
        state.update(|s| s.set_date(date));
        refresh_slots();
    };

    let on_phone_input = move |ev: leptos::ev::Event| {
        let phone = event_target_value(&ev);
        if state.try_update(|s| s.set_phone(phone)) == Some(PhoneCheck::Invalid) {
            schedule_phone_error_hide();
        }
    };

    let on_submit = move |_: leptos::ev::MouseEvent| {
        let request = match state.try_update(BookingState::prepare_submission) {
            Some(Ok(request)) => request,
            Some(Err(SubmitRejection::InvalidPhone)) => {
                schedule_phone_error_hide();
                return;
            }
            Some(Err(SubmitRejection::MissingFields | SubmitRejection::InFlight)) | None => return,
        };
        let api_base_url = config.with_value(|c| c.api_base_url.clone());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::book_appointment(&api_base_url, &request).await;
            if let Err(e) = &result {
                leptos::logging::warn!("booking {} at {} failed: {e}", request.date, request.time);
            }
            if let Some(refresh) = state.try_update(|s| s.finish_booking(result)).flatten() {
                fetch_slots(refresh);
            }
        });
        #[cfg(not(feature = "csr"))]
        leptos::logging::log!("booking {} at {} needs a browser ({api_base_url})", request.date, request.time);
    };

    let slot_options = move || {
        state.with(|s| {
            s.slot_options
                .iter()
                .map(|option| {
                    view! {
                        <option
                            class=option_class(option)
                            value=option.value.clone()
                            disabled=option.is_disabled()
                        >
                            {option.label.clone()}
                        </option>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="booking-widget">
            <h2>{TITLE}</h2>
            <input
                class="booking-widget__name"
                type="text"
                placeholder="Enter your name"
                required=true
                prop:value=move || state.with(|s| s.form.name.clone())
                on:input=move |ev| state.update(|s| s.set_name(event_target_value(&ev)))
            />
            <input
                class="booking-widget__phone"
                type="text"
                placeholder="Enter phone (10 digits)"
                required=true
                prop:value=move || state.with(|s| s.form.phone.clone())
                on:input=on_phone_input
            />
            <small
                class="booking-widget__phone-error"
                style:color="red"
                style:display=move || phone_error_display(state.with(|s| s.phone_error_visible))
            >
                {PHONE_ERROR_TEXT}
            </small>
            <input
                class="booking-widget__date"
                type="date"
                required=true
                prop:value=move || state.with(|s| s.form.date.clone())
                on:change=on_date_change
            />
            <select
                class="booking-widget__slots"
                prop:value=move || state.with(|s| s.form.selected_slot_value.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.select_slot(&value));
                }
            >
                {slot_options}
            </select>
            <button
                class="booking-widget__submit"
                type="button"
                disabled=move || state.with(|s| s.submitting)
                on:click=on_submit
            >
                {SUBMIT_LABEL}
            </button>
            <p class="booking-widget__message">{move || state.with(|s| s.status_message.clone())}</p>
        </div>
    }
}
