//! The `ScoreResult` value type and its ordering (spec §3).
//!
//! Named `ScoreResult` rather than `Result` to avoid colliding with
//! `std::result::Result` and this crate's own `errors::Result` alias.

use std::cmp::Ordering;

/// One `(start, segment_length, cost)` scoring outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    pub start: usize,
    pub segment_length: usize,
    pub cost: f64,
}

impl ScoreResult {
    pub fn new(start: usize, segment_length: usize, cost: f64) -> Self {
        ScoreResult { start, segment_length, cost }
    }

    /// `|a.cost - b.cost| <= epsilon && a.start == b.start && a.segment_length == b.segment_length`.
    pub fn equivalent(&self, other: &Self, epsilon: f64) -> bool {
        (self.cost - other.cost).abs() <= epsilon
            && self.start == other.start
            && self.segment_length == other.segment_length
    }

    /// The ordering of spec §3: lower cost wins (within `epsilon`), ties
    /// broken by longer `segment_length`, further ties by lower `start`.
    /// Ascending under this order means "better first".
    pub fn compare(&self, other: &Self, epsilon: f64) -> Ordering {
        if (self.cost - other.cost).abs() > epsilon {
            return self
                .cost
                .partial_cmp(&other.cost)
                .unwrap_or(Ordering::Equal);
        }
        // Costs tie: longer segment_length wins, i.e. sorts first.
        match other.segment_length.cmp(&self.segment_length) {
            Ordering::Equal => self.start.cmp(&other.start),
            ord => ord,
        }
    }
}
