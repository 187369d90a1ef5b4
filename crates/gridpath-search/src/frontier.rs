//! The A* open frontier.
//!
//! Entries are ordered by smallest `f` first; equal `f` values pop in
//! insertion order. The same cell may be queued several times. Stale
//! duplicates are filtered by the engine's closed set, not here.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One queued candidate: a cell reached with cost `g` via `parent`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) f: f64,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
    pub(crate) g: u32,
    pub(crate) parent: Option<usize>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse both keys so BinaryHeap (max-heap) pops smallest f, then
        // oldest seq.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-`f` priority queue with FIFO tie-breaking.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
    peak: usize,
}

impl Frontier {
    pub(crate) fn push(&mut self, f: f64, idx: usize, g: u32, parent: Option<usize>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            f,
            seq,
            idx,
            g,
            parent,
        });
        self.peak = self.peak.max(self.heap.len());
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total entries ever pushed.
    pub(crate) fn pushed(&self) -> u64 {
        self.next_seq
    }

    /// Largest size the queue reached.
    pub(crate) fn peak(&self) -> usize {
        self.peak
    }
}
