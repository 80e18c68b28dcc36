use super::rbtree::Color;
use super::{NodeId, RBTree};

/// A broken tree invariant and the node where it was detected.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum InvariantViolation {
    RedRoot,
    RedSentinel,
    RedChildOfRed(NodeId),
    BlackHeight(NodeId),
    Order(NodeId),
    ParentLink(NodeId),
    Count { len: usize, nodes: usize },
}

impl<K: Ord> RBTree<K> {
    /// Walk the whole tree and check binary search tree order,
    /// red-black coloring, parent links and the node count.
    /// Return the black height of the tree, counting the sentinel.
    pub(crate) fn check(&self) -> Result<usize, InvariantViolation> {
        if self.color(self.root) == Color::Red {
            return Err(InvariantViolation::RedRoot);
        }
        if self.color(NodeId::NIL) == Color::Red {
            return Err(InvariantViolation::RedSentinel);
        }
        if !self.root.is_nil() && !self.parent(self.root).is_nil() {
            return Err(InvariantViolation::ParentLink(self.root));
        }
        let (black_height, nodes) =
            self.check_subtree(self.root, None, None)?;
        if nodes != self.len() {
            return Err(InvariantViolation::Count {
                len: self.len(),
                nodes,
            });
        }
        Ok(black_height)
    }

    /// Return (black height, node count) of subtree `x` whose keys must
    /// lie within `lower` and `upper`.
    fn check_subtree(
        &self,
        x: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<(usize, usize), InvariantViolation> {
        if x.is_nil() {
            return Ok((1, 0));
        }

        let key = self.key(x);
        if lower.map_or(false, |l| key < l)
            || upper.map_or(false, |u| key > u)
        {
            return Err(InvariantViolation::Order(x));
        }

        let (left, right) = (self.left(x), self.right(x));
        for child in [left, right] {
            if !child.is_nil() && self.parent(child) != x {
                return Err(InvariantViolation::ParentLink(child));
            }
        }

        let color = self.color(x);
        if color == Color::Red
            && (self.color(left) == Color::Red
                || self.color(right) == Color::Red)
        {
            return Err(InvariantViolation::RedChildOfRed(x));
        }

        let (left_height, left_count) =
            self.check_subtree(left, lower, Some(key))?;
        let (right_height, right_count) =
            self.check_subtree(right, Some(key), upper)?;
        if left_height != right_height {
            return Err(InvariantViolation::BlackHeight(x));
        }

        let black = usize::from(color == Color::Black);
        Ok((left_height + black, left_count + right_count + 1))
    }
}
