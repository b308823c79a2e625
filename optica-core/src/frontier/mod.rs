//! Seed frontier: a decrease-key priority queue over reachability distances.
//!
//! Extraction order must match a list kept sorted by key, where a new entry
//! is inserted in front of the first entry whose key is not smaller. Among
//! equal keys the most recently inserted entry therefore leaves first. The
//! heap encodes this as the composite key `(reachability ascending, insertion
//! sequence descending)`; a pid → slot map gives O(log n) repositioning.

use std::cmp::Ordering;

/// A frontier entry: a point and the reachability it was queued with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seed {
    /// Index of the queued point.
    pub id: usize,
    /// Reachability distance the point was queued with.
    pub reachability: f64,
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    seed: Seed,
    sequence: u64,
}

impl Slot {
    /// Returns `true` when `self` must leave the frontier before `other`.
    fn precedes(&self, other: &Self) -> bool {
        match compare_keys(self.seed.reachability, other.seed.reachability) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.sequence > other.sequence,
        }
    }
}

// `<` semantics rather than `total_cmp`, so `-0.0` and `0.0` tie.
fn compare_keys(left: f64, right: f64) -> Ordering {
    if left < right {
        Ordering::Less
    } else if left > right {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Min-priority frontier keyed by reachability distance.
///
/// Each point appears at most once; queuing a point that is already present
/// replaces its stale entry.
///
/// # Examples
/// ```
/// use optica_core::SeedFrontier;
///
/// let mut frontier = SeedFrontier::with_capacity(4);
/// frontier.enqueue(0, 3.0);
/// frontier.enqueue(1, 2.0);
/// frontier.enqueue(2, 2.0);
/// frontier.move_up(0, 1.0);
///
/// let order: Vec<usize> = std::iter::from_fn(|| frontier.dequeue()).map(|seed| seed.id).collect();
/// assert_eq!(order, vec![0, 2, 1]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SeedFrontier {
    heap: Vec<Slot>,
    positions: Vec<Option<usize>>,
    next_sequence: u64,
}

impl SeedFrontier {
    /// Creates an empty frontier sized for point ids below `points`.
    #[must_use]
    pub fn with_capacity(points: usize) -> Self {
        Self {
            heap: Vec::with_capacity(points),
            positions: vec![None; points],
            next_sequence: 0,
        }
    }

    /// Returns the number of queued points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when no points are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` when `id` is queued.
    #[must_use]
    pub fn contains(&self, id: usize) -> bool {
        self.position(id).is_some()
    }

    /// Returns the entry that [`SeedFrontier::dequeue`] would remove next.
    #[must_use]
    pub fn peek(&self) -> Option<Seed> {
        self.heap.first().map(|slot| slot.seed)
    }

    /// Queues `id` with `reachability`, ahead of any entries with an equal key.
    pub fn enqueue(&mut self, id: usize, reachability: f64) {
        if let Some(position) = self.position(id) {
            self.remove_at(position);
        }
        if id >= self.positions.len() {
            self.positions.resize(id + 1, None);
        }

        let slot = Slot {
            seed: Seed { id, reachability },
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;

        let position = self.heap.len();
        self.heap.push(slot);
        self.set_position(id, Some(position));
        self.sift_up(position);
    }

    /// Repositions `id` after its reachability improved.
    ///
    /// The stale entry is dropped and the point is queued afresh, so among
    /// equal keys it now leaves first. A point that is not queued is simply
    /// enqueued.
    pub fn move_up(&mut self, id: usize, reachability: f64) {
        #[cfg(feature = "metrics")]
        metrics::counter!("optics_frontier_decrease_keys").increment(1);
        self.enqueue(id, reachability);
    }

    /// Removes and returns the entry with the smallest key.
    pub fn dequeue(&mut self) -> Option<Seed> {
        if self.heap.is_empty() {
            return None;
        }
        Some(self.remove_at(0).seed)
    }

    fn position(&self, id: usize) -> Option<usize> {
        self.positions.get(id).copied().flatten()
    }

    fn set_position(&mut self, id: usize, position: Option<usize>) {
        if let Some(entry) = self.positions.get_mut(id) {
            *entry = position;
        }
    }

    fn remove_at(&mut self, position: usize) -> Slot {
        let last = self.heap.len() - 1;
        self.swap(position, last);
        let removed = self.heap.swap_remove(last);
        self.set_position(removed.seed.id, None);
        if position < self.heap.len() {
            self.sift_down(position);
            self.sift_up(position);
        }
        removed
    }

    fn precedes(&self, left: usize, right: usize) -> bool {
        match (self.heap.get(left), self.heap.get(right)) {
            (Some(a), Some(b)) => a.precedes(b),
            _ => false,
        }
    }

    fn swap(&mut self, left: usize, right: usize) {
        if left == right {
            return;
        }
        self.heap.swap(left, right);
        for position in [left, right] {
            if let Some(id) = self.heap.get(position).map(|slot| slot.seed.id) {
                self.set_position(id, Some(position));
            }
        }
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.precedes(position, parent) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut best = position;
            if self.precedes(left, best) {
                best = left;
            }
            if self.precedes(right, best) {
                best = right;
            }
            if best == position {
                break;
            }
            self.swap(position, best);
            position = best;
        }
    }
}
