//! Query gating and request parameters

/// Whether a typed term is long enough to query.
///
/// Length is counted in characters on the raw term; whitespace counts.
pub fn meets_minimum(term: &str, minimum: usize) -> bool {
    term.chars().count() >= minimum
}

/// Characters still needed before a query may fire
pub fn remaining_chars(term: &str, minimum: usize) -> usize {
    minimum.saturating_sub(term.chars().count())
}

/// Request parameters for a term. The term is the only filter.
pub fn build_query_params(term: &str) -> Vec<(&'static str, String)> {
    vec![("term", term.to_string())]
}
