//! Bounded top-K results (C9): a fixed-capacity container keeping the `N`
//! best `ScoreResult`s seen so far, under the ordering of spec §3.

use crate::result::ScoreResult;

/// A capacity-bounded, always-sorted (best first) collection of results.
pub struct TopK {
    capacity: usize,
    epsilon: f64,
    items: Vec<ScoreResult>,
}

impl TopK {
    /// `capacity == 0` disables storage entirely: every insert is a no-op.
    pub fn new(capacity: usize, epsilon: f64) -> Self {
        TopK {
            capacity,
            epsilon,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `result`, evicting the current worst entry if the container
    /// is full and `result` is strictly better.
    pub fn insert(&mut self, result: ScoreResult) {
        if self.capacity == 0 {
            return;
        }
        let pos = self
            .items
            .binary_search_by(|existing| existing.compare(&result, self.epsilon))
            .unwrap_or_else(|p| p);

        if self.items.len() < self.capacity {
            self.items.insert(pos, result);
            return;
        }

        // Full: only insert if strictly better than the current worst (last).
        let worst = *self.items.last().unwrap();
        if result.compare(&worst, self.epsilon) == std::cmp::Ordering::Less {
            self.items.pop();
            let pos = self
                .items
                .binary_search_by(|existing| existing.compare(&result, self.epsilon))
                .unwrap_or_else(|p| p);
            self.items.insert(pos, result);
        }
    }

    /// The current number of stored results.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in ascending (best-first) order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreResult> {
        self.items.iter()
    }

    /// A snapshot of the current contents, best first.
    pub fn snapshot(&self) -> Vec<ScoreResult> {
        self.items.clone()
    }
}
