//! Growable bitset of state ids.

use std::fmt;

use crate::StateId;

const WORD_BITS: u32 = u64::BITS;

/// Set of state ids backed by a bitset.
///
/// Iteration is always in ascending id order, so `to_vec` yields a
/// canonical signature independent of insertion order.
#[derive(Clone, Default)]
pub struct StateSet {
    words: Vec<u64>,
    len: usize,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty set pre-sized for ids below `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS as usize)],
            len: 0,
        }
    }

    /// Insert `id`, returning `false` if it was already present.
    pub fn insert(&mut self, id: StateId) -> bool {
        let (word, bit) = Self::locate(id);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let mask = 1u64 << bit;
        if self.words[word] & mask != 0 {
            return false;
        }
        self.words[word] |= mask;
        self.len += 1;
        true
    }

    pub fn contains(&self, id: StateId) -> bool {
        let (word, bit) = Self::locate(id);
        self.words
            .get(word)
            .is_some_and(|w| w & (1u64 << bit) != 0)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let base = i as StateId * WORD_BITS;
            (0..WORD_BITS)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| base + bit)
        })
    }

    pub fn union_with(&mut self, other: &StateSet) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (mine, theirs) in self.words.iter_mut().zip(&other.words) {
            *mine |= theirs;
        }
        self.len = self.words.iter().map(|w| w.count_ones() as usize).sum();
    }

    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.words.iter().enumerate().all(|(i, &word)| {
            let theirs = other.words.get(i).copied().unwrap_or(0);
            word & !theirs == 0
        })
    }

    /// Sorted ids, usable as a canonical key.
    pub fn to_vec(&self) -> Vec<StateId> {
        self.iter().collect()
    }

    fn locate(id: StateId) -> (usize, u32) {
        ((id / WORD_BITS) as usize, id % WORD_BITS)
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.is_subset(other)
    }
}

impl Eq for StateSet {}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut set = StateSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<StateId> for StateSet {
    fn extend<I: IntoIterator<Item = StateId>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
