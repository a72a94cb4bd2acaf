//! Frontier containers: one interface, three orderings.
//!
//! - [`FifoQueue`] removes the earliest inserted item (breadth-first).
//! - [`LifoStack`] removes the most recently inserted item (depth-first).
//! - [`PriorityQueue`] removes the item with the lowest [`Priority`],
//!   ties broken by insertion order.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::error::FrontierError;

/// Uniform container interface shared by every search ordering.
pub trait Frontier<T> {
    /// Number of resident items.
    fn len(&self) -> usize;

    /// Whether no item is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add an item.
    fn insert(&mut self, item: T);

    /// Remove the next item under this container's ordering.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::EmptyContainer`] if nothing is resident.
    fn remove(&mut self) -> Result<T, FrontierError>;

    /// Drop every resident item.
    fn clear(&mut self);
}

/// First-in, first-out queue.
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoQueue<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn insert(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn remove(&mut self) -> Result<T, FrontierError> {
        self.items.pop_front().ok_or(FrontierError::EmptyContainer)
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Last-in, first-out stack.
#[derive(Debug, Clone)]
pub struct LifoStack<T> {
    items: Vec<T>,
}

impl<T> LifoStack<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for LifoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for LifoStack<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    fn remove(&mut self) -> Result<T, FrontierError> {
        self.items.pop().ok_or(FrontierError::EmptyContainer)
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Best-first ordering key: `(f, h)`.
///
/// Lower `f` (estimated total cost) first; among equal `f`, lower `h`
/// (estimated remaining cost) first. Comparison uses IEEE total ordering so
/// the heap never sees an undefined comparison.
#[derive(Debug, Clone, Copy)]
pub struct Priority {
    pub f: f64,
    pub h: f64,
}

impl Priority {
    /// Key for a node with path cost `g` and heuristic estimate `h`.
    #[must_use]
    pub fn new(g: f64, h: f64) -> Self {
        Self { f: g + h, h }
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.h.total_cmp(&other.h))
    }
}

/// A heap entry. Ordering is restricted to `(priority, sequence)`; the item
/// itself never takes part in comparisons.
#[derive(Debug)]
struct QueueEntry<T> {
    key: Reverse<(Priority, u64)>,
    item: T,
}

impl<T> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for QueueEntry<T> {}

impl<T> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority queue with stable tie-breaking.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`. Equal
/// priorities come out in insertion order via a monotonic sequence number.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<QueueEntry<T>>,
    next_sequence: u64,
}

impl<T> PriorityQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Priority of the item `remove` would return next.
    #[must_use]
    pub fn peek_priority(&self) -> Option<Priority> {
        self.heap.peek().map(|e| (e.key.0).0)
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<(Priority, T)> for PriorityQueue<T> {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insert(&mut self, (priority, item): (Priority, T)) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueueEntry {
            key: Reverse((priority, sequence)),
            item,
        });
    }

    fn remove(&mut self) -> Result<(Priority, T), FrontierError> {
        self.heap
            .pop()
            .map(|e| ((e.key.0).0, e.item))
            .ok_or(FrontierError::EmptyContainer)
    }

    /// Drops resident items and restarts the tie-break sequence.
    fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }
}
