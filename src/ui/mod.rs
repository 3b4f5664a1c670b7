// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - render: orchestrates the page, one row per visible form item plus legend
// - form: renders plain form fields
// - picker: renders the augmented searchable selection

pub mod form;
pub mod picker;
pub mod render;

pub use render::render;
