use super::{InvalidCapacity, KLowest};
use crate::{Observation, Selector};
use std::convert::TryFrom;

impl<K: Ord> KLowest<K> {
    /// Insert a value while filling. The new node becomes the maximum if
    /// its key is not smaller than the current maximum.
    fn fill(&mut self, value: K) -> Observation<K> {
        let is_max = self.max.is_nil() || value >= self.tree[self.max];
        let node = self.tree.insert(value);
        if is_max {
            self.max = node;
        }
        if self.is_full() {
            log::debug!("KLowest selector full: {} values", self.capacity);
        }
        Observation::Kept
    }

    /// Make room for `value` in a full selector if it is smaller than
    /// the maximum.
    fn replace_max(&mut self, value: K) -> Observation<K> {
        if self.max.is_nil() || value >= self.tree[self.max] {
            return Observation::Rejected(value);
        }

        let predecessor = self.tree.predecessor(self.max);
        if predecessor.is_nil() || value >= self.tree[predecessor] {
            // The maximum node stays the rightmost node.
            log::trace!("KLowest replace maximum in place");
            Observation::Replaced(self.tree.replace_key(self.max, value))
        } else {
            // The maximum has no right child, hence it is the node
            // unlinked from the tree and `predecessor` stays valid.
            log::trace!("KLowest evict maximum and insert");
            let evicted = self.tree.delete(self.max);
            self.max = predecessor;
            // `value` is smaller than the new maximum.
            self.tree.insert(value);
            Observation::Evicted(evicted)
        }
    }
}

impl<K: Ord + Clone> Selector<K> for KLowest<K> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn size(&self) -> usize {
        self.tree.len()
    }

    fn observe(&mut self, value: K) -> Observation<K> {
        let out = if self.tree.len() < self.capacity {
            self.fill(value)
        } else {
            self.replace_max(value)
        };
        debug_assert!(self.max_is_consistent());
        debug_assert!(self.tree.len() <= self.capacity);
        out
    }

    fn snapshot_ascending(&self) -> Vec<K> {
        self.tree.iter().cloned().collect()
    }

    fn max(&self) -> Option<&K> {
        self.tree.get(self.max)
    }
}

impl<K> TryFrom<i64> for KLowest<K> {
    type Error = InvalidCapacity;

    /// Build a selector from a signed capacity, rejecting negative
    /// values.
    fn try_from(k: i64) -> Result<Self, Self::Error> {
        match usize::try_from(k) {
            Ok(k) => Ok(KLowest::new(k)),
            Err(_) => Err(InvalidCapacity(k)),
        }
    }
}

impl<K> Default for KLowest<K> {
    /// A selector with a capacity of zero.
    fn default() -> Self {
        KLowest::new(0)
    }
}
