//! Availability tracking for unoccupied board cells.

use rand::Rng;

/// Set of unoccupied cell numbers (`y * length + x`).
///
/// Dense `slots` list plus a reverse index gives O(1) membership, removal and
/// uniform random selection. Iteration order is deterministic, so a seeded
/// RNG always picks the same cell.
#[derive(Debug, Clone)]
pub(crate) struct AvailableSet {
    slots: Vec<usize>,
    positions: Vec<Option<usize>>,
}

impl AvailableSet {
    /// All `capacity` cells available.
    pub(crate) fn full(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).collect(),
            positions: (0..capacity).map(Some).collect(),
        }
    }

    /// No cells available.
    pub(crate) fn empty(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            positions: vec![None; capacity],
        }
    }

    pub(crate) fn contains(&self, n: usize) -> bool {
        matches!(self.positions.get(n), Some(Some(_)))
    }

    pub(crate) fn insert(&mut self, n: usize) {
        if n < self.positions.len() && !self.contains(n) {
            self.positions[n] = Some(self.slots.len());
            self.slots.push(n);
        }
    }

    /// Removes `n`, returning whether it was present.
    pub(crate) fn remove(&mut self, n: usize) -> bool {
        let Some(Some(slot)) = self.positions.get(n).copied() else {
            return false;
        };
        self.slots.swap_remove(slot);
        if let Some(&moved) = self.slots.get(slot) {
            self.positions[moved] = Some(slot);
        }
        self.positions[n] = None;
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Uniformly chosen member, `None` when empty.
    pub(crate) fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }
        Some(self.slots[rng.random_range(0..self.slots.len())])
    }
}
