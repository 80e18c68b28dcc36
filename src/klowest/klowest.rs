use crate::rbtree::{Iter, NodeId, RBTree};

/// [`Selector`](trait.Selector.html) of the `k` smallest values of a
/// stream, backed by a red-black tree.
///
/// [`KLowest`] keeps the retained values in a
/// [`RBTree`](rbtree/struct.RBTree.html) and caches the handle of the
/// node holding the largest retained value. While the selector is
/// filling, observed values are inserted in the tree. Once it is full,
/// an observed value smaller than the cached maximum takes its place:
/// * if the value is not smaller than the predecessor of the maximum, it
/// overwrites the maximum key in place. The node remains the rightmost
/// node of the tree and the tree shape is untouched.
/// * otherwise the maximum node is deleted, its predecessor becomes the
/// new maximum and the value is inserted in the tree.
///
/// Values larger than or equal to the maximum of a full selector are
/// rejected. Matching values are retained like any other value, such
/// that the selection is the multiset of the `k` smallest values.
///
/// * Observation complexity is `$O(log(k))$`, `$O(1)$` for rejected
/// values.
/// * Snapshot complexity is `$O(k)$`.
/// * Size and maximum queries are `$O(1)$`.
///
/// ## Examples
///
/// ```
/// use klowest::{KLowest, Observation, Selector};
///
/// let mut selector = KLowest::<i32>::new(3);
/// for value in [5, 1, 9] {
///     assert_eq!(selector.observe(value), Observation::Kept);
/// }
///
/// // 0 is below the predecessor of 9: 9 is evicted.
/// assert_eq!(selector.observe(0), Observation::Evicted(9));
/// // 7 is larger than the maximum 5 and is rejected.
/// assert_eq!(selector.observe(7), Observation::Rejected(7));
/// // 3 is between 1 and 5: it overwrites the maximum in place.
/// assert_eq!(selector.observe(3), Observation::Replaced(5));
///
/// assert_eq!(selector.snapshot_ascending(), vec![0, 1, 3]);
/// ```
///
/// [`KLowest`] can also be built from a
/// [builder pattern](builder/struct.Builder.html#method.klowest) and a
/// configuration.
pub struct KLowest<K> {
    // Maximum number of values in the tree.
    pub(super) capacity: usize,
    pub(super) tree: RBTree<K>,
    // Node holding the largest key, NIL when the tree is empty.
    pub(super) max: NodeId,
}

impl<K> KLowest<K> {
    /// Create an empty selector retaining up to `k` values.
    pub fn new(k: usize) -> Self {
        log::debug!("KLowest selector with capacity {}", k);
        KLowest {
            capacity: k,
            tree: RBTree::new(),
            max: NodeId::NIL,
        }
    }

    /// Whether the selector holds `capacity()` values.
    pub fn is_full(&self) -> bool {
        self.tree.len() == self.capacity
    }

    /// Iterate retained values in ascending order without copying
    /// them.
    pub fn iter(&self) -> Iter<'_, K> {
        self.tree.iter()
    }

    /// Height of the underlying tree.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Whether the cached maximum is the rightmost node of the tree.
    pub(super) fn max_is_consistent(&self) -> bool {
        self.max == self.tree.maximum()
    }
}

impl<'a, K> IntoIterator for &'a KLowest<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
