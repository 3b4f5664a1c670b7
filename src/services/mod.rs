//! Background services
//!
//! - search: executes directory searches and reports results over a channel

pub mod search;

pub use search::{spawn_search_service, SearchRequest, SearchResult};
