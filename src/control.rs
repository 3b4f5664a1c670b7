//! Searchable selection control
//!
//! State machine behind the picker: debounced querying gated by a minimum
//! length, a per-term response cache, the candidate list for the latest
//! query and the active selection. Rendering and I/O live elsewhere; the
//! host loop feeds it input and time, forwards the requests it returns to
//! the search service and hands back the results.

use std::time::{Duration, Instant};

use crate::cache::QueryCache;
use crate::logic::candidate::{transform_results, Candidate, SelectOption};
use crate::logic::debounce::Debouncer;
use crate::logic::{errors, navigation, query};
use crate::services::{SearchRequest, SearchResult};

pub const DEFAULT_PLACEHOLDER: &str = "Type to search for a directory group...";
pub const DEFAULT_MINIMUM_INPUT_LENGTH: usize = 2;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    pub placeholder: String,
    pub minimum_input_length: usize,
    pub delay: Duration,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            minimum_input_length: DEFAULT_MINIMUM_INPUT_LENGTH,
            delay: DEFAULT_DELAY,
        }
    }
}

/// What the dropdown currently reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    TooShort { remaining: usize },
    Searching,
    Ready,
    Failed { message: String },
}

type SelectListener = Box<dyn FnMut(&SelectOption)>;

pub struct SearchSelect {
    id: String,
    config: PickerConfig,
    selection: Option<SelectOption>,
    query: String,
    candidates: Vec<Candidate>,
    highlighted: Option<usize>,
    status: QueryStatus,
    debouncer: Debouncer,
    cache: QueryCache,
    next_seq: u64,
    /// Request whose answer may update the display; None once resolved otherwise
    active_seq: Option<u64>,
    listeners: Vec<SelectListener>,
}

impl SearchSelect {
    /// Build a control, optionally seeded with an already-selected option
    pub fn new(id: impl Into<String>, config: PickerConfig, seed: Option<SelectOption>) -> Self {
        let debouncer = Debouncer::new(config.delay);
        Self {
            id: id.into(),
            config,
            selection: seed,
            query: String::new(),
            candidates: Vec::new(),
            highlighted: None,
            status: QueryStatus::Idle,
            debouncer,
            cache: QueryCache::new(),
            next_seq: 0,
            active_seq: None,
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    pub fn selection(&self) -> Option<&SelectOption> {
        self.selection.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Register a selection-changed listener
    pub fn on_select<F>(&mut self, listener: F)
    where
        F: FnMut(&SelectOption) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// The user edited the search text
    pub fn on_input(&mut self, term: &str, now: Instant) {
        self.query = term.to_string();

        let minimum = self.config.minimum_input_length;
        if !query::meets_minimum(term, minimum) {
            self.debouncer.cancel();
            self.active_seq = None;
            self.clear_candidates();
            self.status = QueryStatus::TooShort {
                remaining: query::remaining_chars(term, minimum),
            };
            return;
        }

        self.debouncer.push(term.to_string(), now);
    }

    /// Advance time. Returns the request to issue once the debounce settles
    /// on a term that is not cached.
    pub fn tick(&mut self, now: Instant) -> Option<SearchRequest> {
        let term = self.debouncer.poll(now)?;

        if let Some(entries) = self.cache.get(&term) {
            tracing::debug!(control = %self.id, term = %term, "query cache hit");
            self.candidates = transform_results(entries);
            self.highlighted = navigation::clamp_highlight(None, self.candidates.len());
            self.status = QueryStatus::Ready;
            self.active_seq = None;
            return None;
        }

        self.next_seq += 1;
        self.active_seq = Some(self.next_seq);
        self.status = QueryStatus::Searching;
        Some(SearchRequest {
            seq: self.next_seq,
            term,
        })
    }

    /// Take in a search outcome
    pub fn apply_result(&mut self, result: SearchResult) {
        let SearchResult { seq, term, entries } = result;

        match entries {
            Ok(entries) => {
                let is_latest = self.active_seq == Some(seq);
                if is_latest {
                    self.candidates = transform_results(&entries);
                    self.highlighted = navigation::clamp_highlight(None, self.candidates.len());
                    self.status = QueryStatus::Ready;
                }
                self.cache.insert_once(&term, entries);
                if !is_latest {
                    tracing::debug!(control = %self.id, seq, active = ?self.active_seq, term = %term, "discarding stale response");
                }
            }
            Err(e) => {
                if self.active_seq != Some(seq) {
                    tracing::debug!(control = %self.id, seq, active = ?self.active_seq, "ignoring stale failure");
                    return;
                }
                self.clear_candidates();
                self.status = QueryStatus::Failed {
                    message: errors::format_error_message(&e),
                };
            }
        }
    }

    /// A request returned by `tick` could not be handed to the search service
    pub fn abandon_request(&mut self, seq: u64, message: &str) {
        if self.active_seq != Some(seq) {
            return;
        }
        self.active_seq = None;
        self.clear_candidates();
        self.status = QueryStatus::Failed {
            message: message.to_string(),
        };
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = navigation::next_highlight(self.highlighted, self.candidates.len());
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = navigation::prev_highlight(self.highlighted, self.candidates.len());
    }

    /// Select the highlighted candidate and notify listeners
    pub fn select_highlighted(&mut self) -> Option<SelectOption> {
        let candidate = self.candidates.get(self.highlighted?)?;
        let option = candidate.to_option();
        self.select(option.clone());
        Some(option)
    }

    /// Make `option` the active selection and notify listeners
    pub fn select(&mut self, option: SelectOption) {
        for listener in self.listeners.iter_mut() {
            listener(&option);
        }
        self.selection = Some(option);
    }

    fn clear_candidates(&mut self) {
        self.candidates.clear();
        self.highlighted = None;
    }
}
