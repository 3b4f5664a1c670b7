//! Directory Picker Library
//!
//! Turns a plain text field into a debounced, cached, searchable picker
//! backed by a remote directory-search endpoint, writing the chosen group
//! name back into the field.

pub mod api;
pub mod augmenter;
pub mod cache;
pub mod config;
pub mod control;
pub mod error;
pub mod field;
pub mod form;
pub mod logic;
pub mod services;
pub mod utils;

pub use augmenter::{AugmenterConfig, FieldAugmenter};
pub use control::{PickerConfig, QueryStatus, SearchSelect};
pub use error::SearchError;
pub use field::{Document, FieldBinding};
