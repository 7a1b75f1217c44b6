//! Per-instance widget configuration parsed from the `init` options object.
//!
//! Each mounted widget owns its own [`WidgetConfig`], so several widgets on
//! one page can talk to different servers.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// What a valid phone keystroke does to an already-visible phone error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhoneErrorPolicy {
    /// Leave the error up until its timer hides it.
    #[default]
    KeepUntilTimeout,
    /// Hide the error as soon as the input becomes valid.
    HideOnValid,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Prefixed verbatim to every request path. Empty means same origin.
    pub api_base_url: String,
    pub phone_error_policy: PhoneErrorPolicy,
}

/// Raw shape of the JavaScript options object.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WidgetOptions {
    api_base_url: String,
    hide_phone_error_on_valid: bool,
}

impl WidgetConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self { api_base_url: api_base_url.into(), phone_error_policy: PhoneErrorPolicy::default() }
    }

    #[must_use]
    pub fn with_phone_error_policy(mut self, policy: PhoneErrorPolicy) -> Self {
        self.phone_error_policy = policy;
        self
    }

    /// Build a config from the JSON text of the options object.
    ///
    /// Recognized keys:
    /// - `apiBaseUrl`: string, default `""`
    /// - `hidePhoneErrorOnValid`: bool, default `false`
    ///
    /// `None`, `"null"`, and unknown keys fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped keys.
    pub fn from_options_json(raw: Option<&str>) -> Result<Self, ConfigError> {
        let options: Option<WidgetOptions> = match raw.map(str::trim) {
            None | Some("") => None,
            Some(text) => serde_json::from_str(text)?,
        };
        let options = options.unwrap_or_default();

        let phone_error_policy = if options.hide_phone_error_on_valid {
            PhoneErrorPolicy::HideOnValid
        } else {
            PhoneErrorPolicy::KeepUntilTimeout
        };
        Ok(Self { api_base_url: options.api_base_url, phone_error_policy })
    }
}

/// Pair a mount point with its config, reading the options only when a
/// container was found. No container means `Ok(None)` however the options
/// look.
///
/// # Errors
///
/// Propagates failures from `read_options` and [`ConfigError`]s from parsing.
pub fn config_for_mount<T, E>(
    container: Option<T>,
    read_options: impl FnOnce() -> Result<Option<String>, E>,
) -> Result<Option<(T, WidgetConfig)>, E>
where
    E: From<ConfigError>,
{
    let Some(container) = container else {
        return Ok(None);
    };
    let raw = read_options()?;
    let config = WidgetConfig::from_options_json(raw.as_deref())?;
    Ok(Some((container, config)))
}
