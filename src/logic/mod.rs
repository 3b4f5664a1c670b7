//! Business Logic
//!
//! Pure functions behind the picker, unit tested in place:
//! - candidate: distinguished name to label/value transformation
//! - debounce: reset-on-new-input debouncing over explicit instants
//! - errors: failure classification and status messages
//! - navigation: highlight movement through the candidate list
//! - query: minimum length gate and request parameters

pub mod candidate;
pub mod debounce;
pub mod errors;
pub mod navigation;
pub mod query;
