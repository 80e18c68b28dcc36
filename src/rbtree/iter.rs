use super::{NodeId, RBTree};

/// In-order iterator over the keys of a [`RBTree`].
///
/// Keys are yielded in ascending order, matching keys in insertion
/// order. The walk follows successors from the minimum node and does not
/// allocate. Walking the whole tree is `$O(n)$`.
pub struct Iter<'a, K> {
    tree: &'a RBTree<K>,
    next: NodeId,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_nil() {
            return None;
        }
        let tree = self.tree;
        let key = tree.key(self.next);
        self.next = tree.successor(self.next);
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}

impl<K> RBTree<K> {
    /// Iterate keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            tree: self,
            next: self.minimum(),
            remaining: self.len(),
        }
    }
}

impl<'a, K> IntoIterator for &'a RBTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::RBTree;

    #[test]
    fn test_iter() {
        let mut tree = RBTree::new();
        for key in [3, 1, 4, 1, 5, 9, 2, 6] {
            tree.insert(key);
        }
        let iter = tree.iter();
        assert_eq!(iter.len(), 8);
        assert_eq!(
            iter.copied().collect::<Vec<i32>>(),
            vec![1, 1, 2, 3, 4, 5, 6, 9]
        );

        // A fresh walk each time.
        let again: Vec<&i32> = (&tree).into_iter().collect();
        assert_eq!(again.len(), 8);
        assert!(RBTree::<i32>::new().iter().next().is_none());
    }
}
