//! Debounced type-ahead search coordination.
//!
//! Rapid keystrokes coalesce: a lookup is issued only for the most recent
//! term once input has been quiet for the debounce window, and a completed
//! lookup is applied only if no newer lookup has been issued since
//! (last-writer-wins by issuance order, not completion order). Time is an
//! explicit argument throughout so the behavior is deterministic in tests.

use chrono::{DateTime, Duration, Utc};

/// Quiet period before a settled term triggers a lookup.
const DEBOUNCE_MILLIS: i64 = 300;

/// A lookup the caller should now perform against the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Issuance sequence number; pass back to [`DebouncedSearch::accept`].
    pub seq: u64,
    pub term: String,
}

/// Debounce state for one type-ahead input.
#[derive(Debug)]
pub struct DebouncedSearch {
    quiet: Duration,
    pending: Option<(String, DateTime<Utc>)>,
    last_issued_term: Option<String>,
    next_seq: u64,
    latest_seq: Option<u64>,
}

impl Default for DebouncedSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl DebouncedSearch {
    pub fn new() -> Self {
        Self::with_quiet_period(Duration::milliseconds(DEBOUNCE_MILLIS))
    }

    pub fn with_quiet_period(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            last_issued_term: None,
            next_seq: 1,
            latest_seq: None,
        }
    }

    /// Record a keystroke. Restarts the quiet period.
    pub fn input(&mut self, term: impl Into<String>, at: DateTime<Utc>) {
        self.pending = Some((term.into(), at));
    }

    /// Issue a lookup if the latest input has settled.
    ///
    /// Returns at most one query per settled term; a term equal to the
    /// previously issued one is swallowed (distinct-until-changed).
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<SearchQuery> {
        let (term, at) = self.pending.as_ref()?;
        if now - *at < self.quiet {
            return None;
        }
        let term = term.clone();
        self.pending = None;
        if self.last_issued_term.as_deref() == Some(term.as_str()) {
            return None;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest_seq = Some(seq);
        self.last_issued_term = Some(term.clone());
        Some(SearchQuery { seq, term })
    }

    /// Whether a completed lookup's result should be applied.
    ///
    /// Only the most recently issued sequence wins; results of superseded
    /// lookups are discarded regardless of completion order.
    pub fn accept(&self, seq: u64) -> bool {
        self.latest_seq == Some(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn t(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn quiet_period_must_elapse_before_issuing() {
        let mut search = DebouncedSearch::new();
        search.input("ro", t(0));
        assert_eq!(search.poll(t(100)), None);
        assert_eq!(
            search.poll(t(300)),
            Some(SearchQuery { seq: 1, term: "ro".to_string() })
        );
        // Settled term is issued once, not repeatedly.
        assert_eq!(search.poll(t(400)), None);
    }

    #[test]
    fn rapid_input_coalesces_to_the_latest_term() {
        let mut search = DebouncedSearch::new();
        search.input("r", t(0));
        search.input("ro", t(100));
        search.input("roof", t(200));
        assert_eq!(search.poll(t(350)), None); // only 150ms since last keystroke
        let query = search.poll(t(500)).unwrap();
        assert_eq!(query.term, "roof");
        assert_eq!(query.seq, 1);
    }

    #[test]
    fn superseded_results_are_discarded() {
        let mut search = DebouncedSearch::new();
        search.input("roof", t(0));
        let first = search.poll(t(300)).unwrap();

        search.input("plumb", t(400));
        let second = search.poll(t(700)).unwrap();

        // First lookup completes late: its result must be dropped.
        assert!(!search.accept(first.seq));
        assert!(search.accept(second.seq));
    }

    #[test]
    fn repeated_term_is_not_reissued() {
        let mut search = DebouncedSearch::new();
        search.input("roof", t(0));
        assert!(search.poll(t(300)).is_some());
        search.input("roof", t(400));
        assert_eq!(search.poll(t(800)), None);
    }

    proptest! {
        /// Property: whatever the keystroke history, at most the final
        /// issued sequence is accepted.
        #[test]
        fn only_latest_sequence_wins(terms in prop::collection::vec("[a-z]{1,6}", 1..10)) {
            let mut search = DebouncedSearch::new();
            let mut issued = Vec::new();
            let mut clock = 0i64;
            for term in &terms {
                search.input(term.clone(), t(clock));
                clock += 400; // every keystroke settles
                if let Some(query) = search.poll(t(clock)) {
                    issued.push(query.seq);
                }
                clock += 10;
            }
            if let Some((last, rest)) = issued.split_last() {
                prop_assert!(search.accept(*last));
                for seq in rest {
                    prop_assert!(!search.accept(*seq));
                }
            }
        }
    }
}
