//! Call-counting store double for ship tests.

use std::cell::Cell;

use super::torpedo_store::TorpedoStore;

/// Scripted store that records every call made to it.
///
/// Defaults to reporting non-empty and failing every fire, so a test only
/// scripts the answers it cares about.
pub struct CountingStore {
    empty_answer: Box<dyn Fn(usize) -> bool>,
    fire_answer: bool,
    is_empty_calls: Cell<usize>,
    fired_counts: Vec<u32>,
}

impl Default for CountingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            empty_answer: Box::new(|_| false),
            fire_answer: false,
            is_empty_calls: Cell::new(0),
            fired_counts: Vec::new(),
        }
    }

    /// Always answer `is_empty` with `empty`.
    pub fn empty(self, empty: bool) -> Self {
        self.empty_when(move |_| empty)
    }

    /// Answer `is_empty` from the zero-based index of the query.
    pub fn empty_when(mut self, answer: impl Fn(usize) -> bool + 'static) -> Self {
        self.empty_answer = Box::new(answer);
        self
    }

    pub fn fires(mut self, success: bool) -> Self {
        self.fire_answer = success;
        self
    }

    pub fn is_empty_calls(&self) -> usize {
        self.is_empty_calls.get()
    }

    pub fn fire_calls(&self) -> usize {
        self.fired_counts.len()
    }

    pub fn fired_counts(&self) -> &[u32] {
        &self.fired_counts
    }
}

impl TorpedoStore for CountingStore {
    fn is_empty(&self) -> bool {
        let index = self.is_empty_calls.get();
        self.is_empty_calls.set(index + 1);
        (self.empty_answer)(index)
    }

    fn fire(&mut self, count: u32) -> bool {
        self.fired_counts.push(count);
        self.fire_answer
    }
}
