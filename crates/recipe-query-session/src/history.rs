use std::collections::VecDeque;

use chrono::Utc;
use recipe_query_core::config::DEFAULT_HISTORY_CAPACITY;
use recipe_query_core::types::{SearchHistoryEntry, StructuredQuery};
use tracing::info;

/// Most-recent-first log of executed queries, bounded by `capacity`.
///
/// The log records whatever it is given; skipping empty queries is up to the
/// caller.
#[derive(Debug)]
pub struct SearchHistory {
    entries: VecDeque<SearchHistoryEntry>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self { Self::with_capacity(DEFAULT_HISTORY_CAPACITY) }
}

impl SearchHistory {
    /// `capacity` is clamped to at least one entry.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn capacity(&self) -> usize { self.capacity }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &SearchHistoryEntry> { self.entries.iter() }

    pub fn latest(&self) -> Option<&SearchHistoryEntry> { self.entries.front() }

    pub fn push(&mut self, query: StructuredQuery) {
        self.entries.push_front(SearchHistoryEntry::new(query, Utc::now()));
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
            info!(capacity = self.capacity, "evicted oldest history entry");
        }
    }
}
