#[allow(clippy::module_inception)]
mod rbtree;
pub use rbtree::{NodeId, RBTree};
mod iter;
pub use iter::Iter;
#[cfg(test)]
mod check;
