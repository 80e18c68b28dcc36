use std::ops::Index;

/// Color of a tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Color {
    Red,
    Black,
}

/// Side of a node with respect to its parent.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Handle on a node stored in a [`RBTree`].
///
/// Handles stay valid across rotations and rebalancing. A handle is
/// invalidated when the node it points to is physically unlinked by
/// [`RBTree::delete()`]. Using an invalidated handle on a tree
/// panics or, if the slot has been reused, designates another node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    /// The sentinel handle, standing for a missing parent or child.
    pub const NIL: NodeId = NodeId(usize::MAX);

    /// Whether this handle is the sentinel.
    pub fn is_nil(self) -> bool {
        self == Self::NIL
    }
}

#[derive(Clone, Copy, Debug)]
pub(super) struct Links {
    pub(super) parent: NodeId,
    pub(super) left: NodeId,
    pub(super) right: NodeId,
    pub(super) color: Color,
}

impl Links {
    fn sentinel() -> Self {
        Links {
            parent: NodeId::NIL,
            left: NodeId::NIL,
            right: NodeId::NIL,
            color: Color::Black,
        }
    }
}

pub(super) struct Node<K> {
    pub(super) key: K,
    pub(super) links: Links,
}

/// Red-black binary search tree of keys.
///
/// Nodes live in an arena of slots and refer to each other with
/// [`NodeId`] handles. The absence of a parent or a child is the shared
/// sentinel [`NodeId::NIL`], which is always black. Slots of deleted
/// nodes are recycled by later insertions.
///
/// Matching keys are allowed. A key equal to a key already in the tree
/// is inserted in the right subtree of the latter, such that the
/// in-order walk yields matching keys in insertion order.
///
/// * Insertion complexity is `$O(log(n))$`.
/// * Deletion from a handle complexity is `$O(log(n))$`.
/// * Predecessor and successor complexity is `$O(log(n))$`, and
/// amortized `$O(1)$` when walking the whole tree.
/// * Length queries are `$O(1)$`.
///
/// This is not an ordered map: there is no lookup by key.
/// Nodes are removed from the handle returned on insertion or obtained
/// while walking the tree.
///
/// ## Examples
///
/// ```
/// use klowest::rbtree::RBTree;
///
/// let mut tree = RBTree::new();
/// let five = tree.insert(5);
/// tree.insert(1);
/// tree.insert(9);
///
/// assert_eq!(tree[tree.maximum()], 9);
/// assert_eq!(tree[tree.predecessor(five)], 1);
///
/// assert_eq!(tree.delete(five), 5);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 9]);
/// ```
pub struct RBTree<K> {
    pub(super) slots: Vec<Option<Node<K>>>,
    // Vacant slots available for the next insertions.
    free: Vec<NodeId>,
    // Links of the sentinel. Deletion fixup may set its parent.
    nil: Links,
    pub(super) root: NodeId,
    len: usize,
}

impl<K> RBTree<K> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty tree with room for `n` nodes before the arena
    /// needs to grow.
    pub fn with_capacity(n: usize) -> Self {
        RBTree {
            slots: Vec::with_capacity(n),
            free: Vec::new(),
            nil: Links::sentinel(),
            root: NodeId::NIL,
            len: 0,
        }
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The key stored in node `x` or `None` if `x` is the sentinel or a
    /// deleted node.
    pub fn get(&self, x: NodeId) -> Option<&K> {
        match self.slots.get(x.0) {
            Some(Some(node)) => Some(&node.key),
            _ => None,
        }
    }

    /// Node with the smallest key, or the sentinel if the tree is empty.
    pub fn minimum(&self) -> NodeId {
        self.extreme(self.root, Side::Left)
    }

    /// Node with the largest key, or the sentinel if the tree is empty.
    /// Among matching largest keys, this is the last inserted one.
    pub fn maximum(&self) -> NodeId {
        self.extreme(self.root, Side::Right)
    }

    /// Node preceding `x` in order, or the sentinel if `x` holds the
    /// smallest key.
    pub fn predecessor(&self, x: NodeId) -> NodeId {
        self.neighbor(x, Side::Left)
    }

    /// Node following `x` in order, or the sentinel if `x` holds the
    /// largest key.
    pub fn successor(&self, x: NodeId) -> NodeId {
        self.neighbor(x, Side::Right)
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((x, depth)) = stack.pop() {
            if x.is_nil() {
                height = height.max(depth);
            } else {
                stack.push((self.left(x), depth + 1));
                stack.push((self.right(x), depth + 1));
            }
        }
        height
    }

    /// Overwrite the key of `x` and return the previous one.
    ///
    /// The tree shape is left untouched, therefore `key` must not be
    /// smaller than the key of the predecessor of `x` nor greater than
    /// the key of its successor.
    pub(crate) fn replace_key(&mut self, x: NodeId, key: K) -> K
    where
        K: Ord,
    {
        debug_assert!({
            let p = self.predecessor(x);
            p.is_nil() || self.key(p) <= &key
        });
        debug_assert!({
            let s = self.successor(x);
            s.is_nil() || &key <= self.key(s)
        });
        std::mem::replace(&mut self.node_mut(x).key, key)
    }

    //--------------------------------------------------------------------//
    // Node accessors.                                                    //
    //--------------------------------------------------------------------//

    pub(super) fn key(&self, x: NodeId) -> &K {
        &self.node(x).key
    }

    fn node(&self, x: NodeId) -> &Node<K> {
        match self.slots.get(x.0) {
            Some(Some(node)) => node,
            _ => panic!("Invalid tree node handle: {:?}", x),
        }
    }

    fn node_mut(&mut self, x: NodeId) -> &mut Node<K> {
        match self.slots.get_mut(x.0) {
            Some(Some(node)) => node,
            _ => panic!("Invalid tree node handle: {:?}", x),
        }
    }

    pub(super) fn links(&self, x: NodeId) -> &Links {
        if x.is_nil() {
            &self.nil
        } else {
            &self.node(x).links
        }
    }

    fn links_mut(&mut self, x: NodeId) -> &mut Links {
        if x.is_nil() {
            &mut self.nil
        } else {
            &mut self.node_mut(x).links
        }
    }

    pub(super) fn parent(&self, x: NodeId) -> NodeId {
        self.links(x).parent
    }

    pub(super) fn left(&self, x: NodeId) -> NodeId {
        self.links(x).left
    }

    pub(super) fn right(&self, x: NodeId) -> NodeId {
        self.links(x).right
    }

    pub(super) fn color(&self, x: NodeId) -> Color {
        self.links(x).color
    }

    fn child(&self, x: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.left(x),
            Side::Right => self.right(x),
        }
    }

    fn set_child(&mut self, x: NodeId, side: Side, child: NodeId) {
        let links = self.links_mut(x);
        match side {
            Side::Left => links.left = child,
            Side::Right => links.right = child,
        }
    }

    fn set_parent(&mut self, x: NodeId, parent: NodeId) {
        self.links_mut(x).parent = parent;
    }

    fn set_color(&mut self, x: NodeId, color: Color) {
        self.links_mut(x).color = color;
    }

    //--------------------------------------------------------------------//
    // Arena.                                                             //
    //--------------------------------------------------------------------//

    fn allocate(&mut self, node: Node<K>) -> NodeId {
        match self.free.pop() {
            Some(x) => {
                self.slots[x.0] = Some(node);
                x
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, x: NodeId) -> Node<K> {
        match self.slots.get_mut(x.0).and_then(Option::take) {
            Some(node) => {
                self.free.push(x);
                node
            }
            None => panic!("Invalid tree node handle: {:?}", x),
        }
    }

    //--------------------------------------------------------------------//
    // Walks.                                                             //
    //--------------------------------------------------------------------//

    /// Descend from `x` toward `side` until the last node before the
    /// sentinel.
    fn extreme(&self, mut x: NodeId, side: Side) -> NodeId {
        if x.is_nil() {
            return x;
        }
        loop {
            let next = self.child(x, side);
            if next.is_nil() {
                return x;
            }
            x = next;
        }
    }

    /// In-order neighbor of `x` on `side`: predecessor on the left,
    /// successor on the right.
    fn neighbor(&self, mut x: NodeId, side: Side) -> NodeId {
        let child = self.child(x, side);
        if !child.is_nil() {
            return self.extreme(child, side.opposite());
        }
        let mut y = self.parent(x);
        while !y.is_nil() && x == self.child(y, side) {
            x = y;
            y = self.parent(y);
        }
        y
    }

    fn side_of(&self, x: NodeId) -> Side {
        if x == self.left(self.parent(x)) {
            Side::Left
        } else {
            Side::Right
        }
    }

    //--------------------------------------------------------------------//
    // Rebalancing.                                                       //
    //--------------------------------------------------------------------//

    /// Rotate the subtree rooted in `x` toward `side`: the child of `x`
    /// on the opposite side takes the place of `x`, and `x` becomes its
    /// child on `side`.
    fn rotate(&mut self, x: NodeId, side: Side) {
        let other = side.opposite();
        let y = self.child(x, other);
        debug_assert!(!y.is_nil());

        let inner = self.child(y, side);
        self.set_child(x, other, inner);
        if !inner.is_nil() {
            self.set_parent(inner, x);
        }

        let parent = self.parent(x);
        self.set_parent(y, parent);
        if parent.is_nil() {
            self.root = y;
        } else if x == self.left(parent) {
            self.set_child(parent, Side::Left, y);
        } else {
            self.set_child(parent, Side::Right, y);
        }

        self.set_child(y, side, x);
        self.set_parent(x, y);
    }

    fn insert_fixup(&mut self, mut z: NodeId) {
        while self.color(self.parent(z)) == Color::Red {
            let parent = self.parent(z);
            // A red node is never the root.
            let grandparent = self.parent(parent);
            let side = self.side_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.color(uncle) == Color::Red {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                z = grandparent;
            } else {
                if z == self.child(parent, side.opposite()) {
                    // Inner child: straighten the zig-zag first.
                    z = parent;
                    self.rotate(z, side);
                }
                let parent = self.parent(z);
                let grandparent = self.parent(parent);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate(grandparent, side.opposite());
            }
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }

    fn delete_fixup(&mut self, mut x: NodeId) {
        while x != self.root && self.color(x) == Color::Black {
            let parent = self.parent(x);
            let side = self.side_of(x);
            let other = side.opposite();
            let mut sibling = self.child(parent, other);

            if self.color(sibling) == Color::Red {
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(parent, other);
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, other);
            if self.color(near) == Color::Black
                && self.color(far) == Color::Black
            {
                self.set_color(sibling, Color::Red);
                x = parent;
                continue;
            }

            if self.color(far) == Color::Black {
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, other);
                sibling = self.child(parent, other);
            }

            let parent_color = self.color(parent);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            let far = self.child(sibling, other);
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            x = self.root;
        }
        self.set_color(x, Color::Black);
    }
}

impl<K: Ord> RBTree<K> {
    /// Insert `key` in the tree and return the handle of its node.
    pub fn insert(&mut self, key: K) -> NodeId {
        let mut parent = NodeId::NIL;
        let mut x = self.root;
        let mut side = Side::Left;
        while !x.is_nil() {
            parent = x;
            side = if key < *self.key(x) {
                Side::Left
            } else {
                Side::Right
            };
            x = self.child(x, side);
        }

        let z = self.allocate(Node {
            key,
            links: Links {
                parent,
                left: NodeId::NIL,
                right: NodeId::NIL,
                color: Color::Red,
            },
        });

        if parent.is_nil() {
            self.root = z;
        } else {
            self.set_child(parent, side, z);
        }
        self.len += 1;
        self.insert_fixup(z);
        z
    }

    /// Remove the key of node `z` from the tree and return it.
    ///
    /// If `z` has two children, its in-order successor is unlinked
    /// instead, after its key has been moved into `z`. In that case
    /// `z` remains a valid handle holding the successor key, while the
    /// successor handle becomes invalid. Otherwise, `z` itself is
    /// unlinked and its handle becomes invalid.
    ///
    /// `z` must be a valid handle of this tree.
    pub fn delete(&mut self, z: NodeId) -> K {
        let y = if self.left(z).is_nil() || self.right(z).is_nil() {
            z
        } else {
            self.successor(z)
        };

        // `y` has at most one child.
        let x = if self.left(y).is_nil() {
            self.right(y)
        } else {
            self.left(y)
        };

        let parent = self.parent(y);
        self.set_parent(x, parent);
        if parent.is_nil() {
            self.root = x;
        } else {
            let side = if y == self.left(parent) {
                Side::Left
            } else {
                Side::Right
            };
            self.set_child(parent, side, x);
        }

        let color = self.color(y);
        let mut removed = self.release(y);
        if y != z {
            std::mem::swap(&mut self.node_mut(z).key, &mut removed.key);
        }
        self.len -= 1;

        if color == Color::Black {
            self.delete_fixup(x);
        }
        self.nil = Links::sentinel();
        removed.key
    }
}

impl<K> Default for RBTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Index<NodeId> for RBTree<K> {
    type Output = K;

    /// Key of a node. Panics if the handle is the sentinel or a deleted
    /// node.
    fn index(&self, x: NodeId) -> &K {
        self.key(x)
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for RBTree<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
