//! JavaScript entry point: `init(selector, options)`.
//!
//! Host pages load the WASM bundle and call
//! `init("#booking", { apiBaseUrl: "https://api.example.com" })`. Each call
//! builds its own [`crate::config::WidgetConfig`] and mounts an independent widget.

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use crate::components::booking_widget::BookingWidget;
use crate::config::{ConfigError, config_for_mount};

static INSTALL_LOGGING: std::sync::Once = std::sync::Once::new();

fn install_logging() {
    INSTALL_LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            leptos::logging::warn!("console logger unavailable: {e}");
        }
    });
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// JSON text of the options object, or `None` when it is absent.
fn options_json(options: &JsValue) -> Result<Option<String>, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(None);
    }
    Ok(js_sys::JSON::stringify(options)?.as_string())
}

/// Mount a booking widget into the first element matching `selector`,
/// replacing its content. A selector that matches nothing is a no-op, even
/// when `options` is malformed.
///
/// # Errors
///
/// Throws in JavaScript when `selector` is not valid CSS, or when it matches
/// an element and `options` cannot be read as widget options.
#[wasm_bindgen]
pub fn init(selector: &str, options: JsValue) -> Result<(), JsValue> {
    install_logging();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::debug!("no document; booking widget for {selector} not mounted");
        return Ok(());
    };
    let Some(element) = document.query_selector(selector)? else {
        log::debug!("no element matches {selector}; booking widget not mounted");
        return Ok(());
    };
    let container = element.dyn_into::<web_sys::HtmlElement>();
    if container.is_err() {
        log::debug!("{selector} is not an HTML element; booking widget not mounted");
    }

    let Some((container, config)) = config_for_mount(container.into_iter().next(), || options_json(&options))? else {
        return Ok(());
    };

    container.set_inner_html("");
    log::debug!("mounting booking widget at {selector} (api: {:?})", config.api_base_url);
    leptos::mount::mount_to(container, move || view! { <BookingWidget config/> }).forget();
    Ok(())
}
