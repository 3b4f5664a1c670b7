//! Field augmentation
//!
//! Replaces a plain text field with a searchable picker while keeping the
//! field as the value the form submits.

use crate::control::{PickerConfig, SearchSelect};
use crate::field::{Document, FieldBinding};
use crate::logic::candidate::SelectOption;

pub const DEFAULT_TARGET_FIELD: &str = "id_name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmenterConfig {
    /// Identifier of the field to augment
    pub target_field: String,
    pub picker: PickerConfig,
}

impl Default for AugmenterConfig {
    fn default() -> Self {
        Self {
            target_field: DEFAULT_TARGET_FIELD.to_string(),
            picker: PickerConfig::default(),
        }
    }
}

pub struct FieldAugmenter {
    config: AugmenterConfig,
}

impl FieldAugmenter {
    pub fn new(config: AugmenterConfig) -> Self {
        Self { config }
    }

    /// Identifier given to the control mounted after `field_id`
    pub fn control_id(field_id: &str) -> String {
        format!("{}_picker", field_id)
    }

    /// Augment the target field of `document`.
    ///
    /// Returns `None` without touching the document when the field is absent;
    /// the enhancement is optional and never blocks the form.
    pub fn initialize<D>(&self, document: &D) -> Option<SearchSelect>
    where
        D: Document,
        D::Field: Clone + 'static,
    {
        let Some(field) = document.field(&self.config.target_field) else {
            tracing::debug!(field = %self.config.target_field, "target field absent, skipping augmentation");
            return None;
        };

        let current = field.value();
        // Render the current value without a round trip
        let seed = (!current.is_empty()).then(|| SelectOption::plain(current));

        let control_id = Self::control_id(&self.config.target_field);
        let mut control = SearchSelect::new(control_id.clone(), self.config.picker.clone(), seed);

        field.hide();
        field.insert_after(&control_id);

        // Only write path into the field after this point
        let sync = field.clone();
        control.on_select(move |option| sync.set_value(&option.value));

        tracing::debug!(
            field = %self.config.target_field,
            control = %control_id,
            seeded = control.selection().is_some(),
            "field augmented"
        );

        Some(control)
    }
}
