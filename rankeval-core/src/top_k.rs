use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Bounded tracker of the K highest-scored (name, score) pairs seen so far.
///
/// Backed by a min-heap keyed by score, so streaming a large input through
/// it costs O(log K) per insertion and never retains more than K entries.
/// A full keeper only admits a strictly better score than its current
/// worst, so the earliest-inserted entry wins a tie at the admission
/// boundary. Scores must be finite.
#[derive(Debug, Clone, Default)]
pub struct TopKKeeper {
    capacity: usize,
    next_seq: u64,
    heap: BinaryHeap<Reverse<TopKEntry>>,
}

#[derive(Debug, Clone)]
struct TopKEntry {
    score: f64,
    seq: u64,
    name: String,
}

impl PartialEq for TopKEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TopKEntry {}

impl PartialOrd for TopKEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TopKEntry {
    // Among equal scores the later insertion orders first out of the
    // min-heap, keeping eviction deterministic.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl TopKKeeper {
    /// Empty keeper retaining at most `capacity` entries. A zero capacity
    /// keeper retains nothing.
    pub fn new(capacity: usize) -> TopKKeeper {
        TopKKeeper {
            capacity,
            next_seq: 0,
            heap: BinaryHeap::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offer one (name, score) pair. Kept if the keeper is not yet full, or
    /// if the score strictly beats the current worst retained entry, which
    /// is then evicted.
    pub fn add(&mut self, name: impl Into<String>, score: f64) {
        let entry = TopKEntry {
            score,
            seq: self.next_seq,
            name: name.into(),
        };
        self.next_seq += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(entry));
        } else if let Some(Reverse(worst)) = self.heap.peek() {
            if entry.score > worst.score {
                self.heap.pop();
                self.heap.push(Reverse(entry));
            }
        }
    }

    /// Current best entries, best first; exact ties come out in insertion
    /// order. Non-destructive: the retained state is left untouched and
    /// `add` can keep being called afterwards.
    pub fn high_scores_first(&self) -> Vec<(f64, String)> {
        let mut entries: Vec<&TopKEntry> = self.heap.iter().map(|Reverse(e)| e).collect();
        entries.sort_by(|a, b| b.cmp(a));
        entries
            .into_iter()
            .map(|e| (e.score, e.name.clone()))
            .collect()
    }
}
