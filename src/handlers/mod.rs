//! Event Handlers
//!
//! - keyboard: user input against the form and picker

pub mod keyboard;
