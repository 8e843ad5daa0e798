//! Working pool shared by both matching rounds.
//!
//! Athletes sit in a stable, weight-sorted arena and are never moved or
//! removed. Pairing an athlete flips its consumed bit; positions such as
//! "the third athlete still available" are resolved through a Fenwick tree
//! of available counts, in O(log n).

use crate::{Athlete, AthleteId};

/// Stable arena of athletes with a consumed bitmap
#[derive(Clone, Debug, Default)]
pub struct Pool {
    athletes: Vec<Athlete>,
    consumed: Vec<bool>,
    live: usize,
    /// 1-based Fenwick tree counting available slots
    counts: Vec<usize>,
}

impl Pool {
    /// Build a pool, stable-sorting ascending by effective weight
    pub fn new(mut athletes: Vec<Athlete>) -> Self {
        athletes.sort_by(|a, b| a.effective_weight().total_cmp(&b.effective_weight()));
        let live = athletes.len();

        let mut counts = vec![0; live + 1];
        for i in 1..=live {
            counts[i] += 1;
            let parent = i + (i & i.wrapping_neg());
            if parent <= live {
                counts[parent] += counts[i];
            }
        }

        Self {
            consumed: vec![false; live],
            athletes,
            live,
            counts,
        }
    }

    /// Number of athletes still available
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of athletes the pool was built with
    pub fn total(&self) -> usize {
        self.athletes.len()
    }

    pub fn get(&self, slot: usize) -> &Athlete {
        &self.athletes[slot]
    }

    pub fn is_consumed(&self, slot: usize) -> bool {
        self.consumed[slot]
    }

    /// Arena slot of the `pos`-th available athlete
    pub fn slot_at(&self, pos: usize) -> Option<usize> {
        if pos >= self.live {
            return None;
        }

        // Descend the tree for the smallest prefix holding pos + 1 slots
        let n = self.athletes.len();
        let mut step = 1 << (usize::BITS - 1 - n.leading_zeros());
        let mut idx = 0;
        let mut remaining = pos + 1;
        while step > 0 {
            let next = idx + step;
            if next <= n && self.counts[next] < remaining {
                idx = next;
                remaining -= self.counts[next];
            }
            step >>= 1;
        }
        Some(idx)
    }

    /// Arena slot holding the given roster record
    pub fn slot_of(&self, id: AthleteId) -> Option<usize> {
        self.athletes.iter().position(|a| a.id() == id)
    }

    /// Mark a slot as paired. Returns false if it already was.
    pub fn consume(&mut self, slot: usize) -> bool {
        if self.consumed[slot] {
            return false;
        }
        self.consumed[slot] = true;
        self.live -= 1;

        let mut i = slot + 1;
        while i < self.counts.len() {
            self.counts[i] -= 1;
            i += i & i.wrapping_neg();
        }
        true
    }

    /// Available slots in ascending weight order
    pub fn live_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.consumed
            .iter()
            .enumerate()
            .filter(|(_, consumed)| !**consumed)
            .map(|(slot, _)| slot)
    }

    /// Available athletes in ascending weight order
    pub fn live(&self) -> impl Iterator<Item = &Athlete> + '_ {
        self.live_slots().map(move |slot| &self.athletes[slot])
    }
}
