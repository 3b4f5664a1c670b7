//! Highlight navigation
//!
//! Index arithmetic for moving the highlight through the candidate list.

/// Next highlight index, wrapping to the top.
///
/// # Examples
/// ```
/// use dirpick::logic::navigation::next_highlight;
///
/// assert_eq!(next_highlight(None, 0), None);
/// assert_eq!(next_highlight(None, 3), Some(0));
/// assert_eq!(next_highlight(Some(2), 3), Some(0));
/// ```
pub fn next_highlight(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Previous highlight index, wrapping to the bottom.
pub fn prev_highlight(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => len - 1,
        Some(i) => i - 1,
    })
}

/// Keep a highlight valid after the list length changed
pub fn clamp_highlight(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(current.map_or(0, |i| i.min(len - 1)))
}
