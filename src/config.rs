use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::reveal::{RevealOptions, DEFAULT_THRESHOLD};

/// FormSubmit's AJAX relay for the agency inbox.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formsubmit.co/ajax/lucasweacked21@gmail.com";
pub const DEFAULT_SUCCESS_RESET_MS: u64 = 3000;

const ENDPOINT_KEY: &str = "RA_FORM_ENDPOINT";
const RESET_KEY: &str = "RA_SUCCESS_RESET_MS";
const THRESHOLD_KEY: &str = "RA_REVEAL_THRESHOLD";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Site-wide settings shared by the server render and the browser bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub form_endpoint: String,
    pub success_reset_ms: u64,
    pub reveal_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            success_reset_ms: DEFAULT_SUCCESS_RESET_MS,
            reveal_threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Overrides baked in when the crate was compiled.
///
/// cargo-leptos builds the server and the wasm bundle from the same
/// environment, so both halves of the page agree on these values.
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENDPOINT_KEY => option_env!("RA_FORM_ENDPOINT"),
        RESET_KEY => option_env!("RA_SUCCESS_RESET_MS"),
        THRESHOLD_KEY => option_env!("RA_REVEAL_THRESHOLD"),
        _ => None,
    };
    value.map(str::to_string)
}

impl SiteConfig {
    /// Defaults with any build-time overrides applied.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(endpoint) = lookup(ENDPOINT_KEY) {
            config.form_endpoint = endpoint;
        }
        if let Some(raw) = lookup(RESET_KEY) {
            config.success_reset_ms = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: RESET_KEY,
                expected: "a whole number of milliseconds",
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(THRESHOLD_KEY) {
            config.reveal_threshold = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: THRESHOLD_KEY,
                expected: "a number in (0, 1]",
                value: raw.clone(),
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.form_endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                key: ENDPOINT_KEY,
                expected: "an http(s) URL",
                value: self.form_endpoint.clone(),
            });
        }
        if self.reveal_options().validate().is_err() {
            return Err(ConfigError::Invalid {
                key: THRESHOLD_KEY,
                expected: "a number in (0, 1]",
                value: self.reveal_threshold.to_string(),
            });
        }
        Ok(())
    }

    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }

    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions::default().with_threshold(self.reveal_threshold)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_published_site() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.form_endpoint, DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.success_reset(), Duration::from_millis(3000));
        assert_eq!(config.reveal_threshold, 0.1);
    }

    #[test]
    fn overrides_are_applied() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("RA_FORM_ENDPOINT", "https://relay.example/ajax/inbox"),
            ("RA_SUCCESS_RESET_MS", " 5000 "),
            ("RA_REVEAL_THRESHOLD", "0.25"),
        ]))
        .unwrap();
        assert_eq!(config.form_endpoint, "https://relay.example/ajax/inbox");
        assert_eq!(config.success_reset_ms, 5000);
        assert_eq!(config.reveal_threshold, 0.25);
    }

    #[test]
    fn rejects_bad_values() {
        let err = SiteConfig::from_lookup(lookup(&[("RA_SUCCESS_RESET_MS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RA_SUCCESS_RESET_MS", .. }));

        let err = SiteConfig::from_lookup(lookup(&[("RA_REVEAL_THRESHOLD", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RA_REVEAL_THRESHOLD", .. }));

        let err = SiteConfig::from_lookup(lookup(&[("RA_FORM_ENDPOINT", "mailto:x@y.z")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RA_FORM_ENDPOINT", .. }));
    }

    #[test]
    fn deserializes_partial_documents() {
        let config: SiteConfig = serde_json::from_str(r#"{"success_reset_ms": 1500}"#).unwrap();
        assert_eq!(config.success_reset_ms, 1500);
        assert_eq!(config.form_endpoint, DEFAULT_FORM_ENDPOINT);
    }
}
