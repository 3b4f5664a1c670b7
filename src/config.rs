use serde::Deserialize;
use std::time::Duration;

use crate::augmenter::{AugmenterConfig, DEFAULT_TARGET_FIELD};
use crate::control::{PickerConfig, DEFAULT_MINIMUM_INPUT_LENGTH, DEFAULT_PLACEHOLDER};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(default = "default_search_path")]
    pub search_path: String,
    /// Sent as the Cookie header; the search endpoint is staff-only
    #[serde(default)]
    pub session_cookie: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_target_field")]
    pub target_field: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_minimum_input_length")]
    pub minimum_input_length: usize,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub form: Vec<FormFieldConfig>,
}

/// A field of the host form
#[derive(Debug, Clone, Deserialize)]
pub struct FormFieldConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub value: String,
}

fn default_search_path() -> String {
    "/admin/utils/ad-groups/".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_target_field() -> String {
    DEFAULT_TARGET_FIELD.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_minimum_input_length() -> usize {
    DEFAULT_MINIMUM_INPUT_LENGTH
}

fn default_delay_ms() -> u64 {
    250
}

impl Config {
    pub fn augmenter_config(&self) -> AugmenterConfig {
        AugmenterConfig {
            target_field: self.target_field.clone(),
            picker: PickerConfig {
                placeholder: self.placeholder.clone(),
                minimum_input_length: self.minimum_input_length,
                delay: Duration::from_millis(self.delay_ms),
            },
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
