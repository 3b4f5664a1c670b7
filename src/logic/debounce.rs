//! Debounce logic
//!
//! Coalesces rapid input into one trigger once a quiet period has elapsed.
//! Time is passed in explicitly so the behavior is testable without sleeping.

use std::time::{Duration, Instant};

/// Reset-on-new-input debouncer holding the latest value
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm (or re-arm) with a new value. Any earlier value is superseded.
    pub fn push(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Drop the pending value without firing
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending value if its quiet period has elapsed
    ///
    /// # Examples
    /// ```
    /// use std::time::{Duration, Instant};
    /// use dirpick::logic::debounce::Debouncer;
    ///
    /// let start = Instant::now();
    /// let mut debouncer = Debouncer::new(Duration::from_millis(250));
    /// debouncer.push("e".to_string(), start);
    /// debouncer.push("en".to_string(), start + Duration::from_millis(100));
    ///
    /// assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
    /// assert_eq!(debouncer.poll(start + Duration::from_millis(350)), Some("en".to_string()));
    /// assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
    /// ```
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let elapsed = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if !elapsed {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }
}
