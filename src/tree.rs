//! An unbalanced BST of unique integers. Every node is exclusively owned by its parent (or by
//! the `Tree` for the root) so removing a node can never leave a dangling reference behind.
//! The shape of the tree is purely a function of insertion order: the first inserted value is
//! the root and nothing is ever rotated.
//!
//! All walks are iterative, so a degenerate tree (e.g. built from sorted input) is as safe to
//! search, traverse, clone, and drop as a bushy one.
//!
//! # Examples
//!
//! ```
//! use bst_menu::tree::Tree;
//! use bst_menu::{Deletion, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.find(1));
//!
//! tree.insert(1).unwrap();
//! assert!(tree.find(1));
//!
//! // Duplicates are rejected and leave the tree untouched.
//! assert_eq!(tree.insert(1), Err(TreeError::Duplicate(1)));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports which case removed the node.
//! assert_eq!(tree.delete(1), Ok(Deletion::Leaf));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::TreeError;
use crate::iter::Iter;
use crate::util::Deletion;

type Link = Option<Box<Node>>;

/// A Binary Search Tree of unique `i32`s supporting insertion, search, deletion, and sorted
/// iteration.
#[derive(Default)]
pub struct Tree {
    root: Link,
    count: usize,
}

/// A node holding `value` along with the values of its immediate children, as returned by
/// [`Tree::subtree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtree {
    /// Value of the left child, if any.
    pub left: Option<i32>,
    /// Value of the node itself.
    pub value: i32,
    /// Value of the right child, if any.
    pub right: Option<i32>,
}

pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    fn new_boxed(value: i32) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Splices the largest node out of `subtree`, handing its left child up to its parent.
    /// Returns the largest value and what is left of the subtree.
    fn take_largest(mut subtree: Box<Self>) -> (i32, Link) {
        let mut link = &mut subtree.right;
        while link.as_ref().map_or(false, |node| node.right.is_some()) {
            link = match link {
                Some(node) => &mut node.right,
                None => break,
            };
        }

        match link.take() {
            Some(largest) => {
                let Node { value, left, .. } = *largest;
                *link = left;
                (value, Some(subtree))
            }
            // `subtree` has no right child so its root is the largest.
            None => {
                let Node { value, left, .. } = *subtree;
                (value, left)
            }
        }
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl Clone for Tree {
    /// Copies the tree node by node so the clone has exactly the same shape.
    fn clone(&self) -> Self {
        // Post-order walk: by the time a node is reached its children are on top of `built`.
        let mut pending: Vec<(&Node, bool)> = self.root.as_deref().map(|n| (n, false)).into_iter().collect();
        let mut built: Vec<Box<Node>> = Vec::with_capacity(self.count);

        while let Some((node, children_done)) = pending.pop() {
            if children_done {
                let right = node.right.as_ref().and_then(|_| built.pop());
                let left = node.left.as_ref().and_then(|_| built.pop());
                built.push(Box::new(Node {
                    value: node.value,
                    left,
                    right,
                }));
            } else {
                pending.push((node, true));
                pending.extend(node.right.as_deref().map(|n| (n, false)));
                pending.extend(node.left.as_deref().map(|n| (n, false)));
            }
        }

        Self {
            root: built.pop(),
            count: self.count,
        }
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("count", &self.count)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// Inserts `value` into the tree. Smaller values go left, larger values go right, and a
    /// value that is already present is rejected without touching the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_menu::tree::Tree;
    /// use bst_menu::TreeError;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(10), Ok(()));
    /// assert_eq!(tree.insert(10), Err(TreeError::Duplicate(10)));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: i32) -> Result<(), TreeError> {
        let link = self.locate_mut(value);
        if link.is_some() {
            warn!(value, "duplicate, not inserted");
            return Err(TreeError::Duplicate(value));
        }

        *link = Some(Node::new_boxed(value));
        self.count += 1;
        debug!(value, count = self.count, "inserted");
        Ok(())
    }

    /// Returns whether `value` is stored in the tree. Searching an empty tree is reported and
    /// simply finds nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_menu::tree::Tree;
    ///
    /// let tree: Tree = [10, 20, 30].into_iter().collect();
    ///
    /// assert!(tree.find(20));
    /// assert!(!tree.find(99));
    /// ```
    pub fn find(&self, value: i32) -> bool {
        if self.is_empty() {
            warn!(value, "cannot search an empty tree");
            return false;
        }
        self.locate(value).is_some()
    }

    /// Deletes the node holding `value` and reports how it was removed. A node with two
    /// children takes over the value of its in-order predecessor (the largest value of its
    /// left subtree) and the predecessor's node is removed instead.
    ///
    /// On error the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_menu::tree::Tree;
    /// use bst_menu::{Deletion, TreeError};
    ///
    /// let mut tree: Tree = [50, 30, 70].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(50), Ok(Deletion::Predecessor(30)));
    /// assert_eq!(tree.root(), Some(30));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [30, 70]);
    ///
    /// assert_eq!(tree.delete(50), Err(TreeError::NotFound(50)));
    /// ```
    pub fn delete(&mut self, value: i32) -> Result<Deletion, TreeError> {
        if self.is_empty() {
            warn!(value, "cannot delete from an empty tree");
            return Err(TreeError::Empty);
        }

        let link = self.locate_mut(value);
        let Some(mut target) = link.take() else {
            warn!(value, "not found, nothing deleted");
            return Err(TreeError::NotFound(value));
        };

        let deletion = match (target.left.take(), target.right.take()) {
            (None, None) => Deletion::Leaf,
            (Some(left), None) => {
                *link = Some(left);
                Deletion::LeftChild
            }
            (None, Some(right)) => {
                *link = Some(right);
                Deletion::RightChild
            }
            (Some(left), Some(right)) => {
                let (predecessor, rest) = Node::take_largest(left);
                target.value = predecessor;
                target.left = rest;
                target.right = Some(right);
                *link = Some(target);
                Deletion::Predecessor(predecessor)
            }
        };

        self.count -= 1;
        debug!(value, ?deletion, count = self.count, "deleted");
        Ok(deletion)
    }

    /// Returns the node holding `value` with the values of its two children.
    pub fn subtree(&self, value: i32) -> Option<Subtree> {
        self.locate(value).map(|node| Subtree {
            left: node.left.as_ref().map(|n| n.value),
            value: node.value,
            right: node.right.as_ref().map(|n| n.value),
        })
    }

    /// An iterator over every value in ascending order. Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_menu::tree::Tree;
    ///
    /// let tree: Tree = [50, 30, 70, 20, 40].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [20, 30, 40, 50, 70]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.count)
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` when the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Value at the root, i.e. the first value inserted that hasn't been deleted (or the
    /// predecessor that replaced it).
    pub fn root(&self) -> Option<i32> {
        self.root.as_ref().map(|n| n.value)
    }

    /// Number of levels in the tree. An empty tree has height 0 and a single node height 1.
    pub fn height(&self) -> usize {
        let mut pending: Vec<(&Node, usize)> = self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        let mut height = 0;

        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Releases every node, children before their parent. Afterwards the tree is empty and
    /// can be reused. Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        let released = release(self.root.take());
        self.count = 0;
        if released > 0 {
            debug!(released, "tree destroyed");
        }
    }

    fn locate(&self, value: i32) -> Option<&Node> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns the link that holds `value`, or the empty link where it would be attached.
    fn locate_mut(&mut self, value: i32) -> &mut Link {
        let mut link = &mut self.root;
        while let Some(ordering) = link.as_ref().map(|node| value.cmp(&node.value)) {
            link = match (ordering, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, found) => return found,
            };
        }
        link
    }
}

/// Post-order teardown with an explicit stack. Returns how many nodes were released.
fn release(root: Link) -> usize {
    let mut pending: Vec<Box<Node>> = root.into_iter().collect();
    let mut released = 0;

    while let Some(mut node) = pending.pop() {
        if node.left.is_none() && node.right.is_none() {
            trace!(value = node.value, "released");
            released += 1;
            continue;
        }

        let left = node.left.take();
        let right = node.right.take();
        pending.push(node);
        pending.extend(right);
        pending.extend(left);
    }

    released
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<i32> for Tree {
    /// Inserts each value in order. Duplicates are skipped (`insert` logs them).
    fn extend<I: IntoIterator<Item = i32>>(&mut self, values: I) {
        for value in values {
            let _ = self.insert(value);
        }
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a set.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same values in both.
    fn do_ops(ops: &[Op<i8>], bst: &mut Tree, set: &mut BTreeSet<i32>) {
        for op in ops {
            match *op {
                Op::Insert(v) => {
                    let v = i32::from(v);
                    assert_eq!(bst.insert(v).is_ok(), set.insert(v));
                }
                Op::Remove(v) => {
                    let v = i32::from(v);
                    let expected = if set.is_empty() {
                        Err(TreeError::Empty)
                    } else if set.remove(&v) {
                        Ok(())
                    } else {
                        Err(TreeError::NotFound(v))
                    };
                    assert_eq!(bst.delete(v).map(|_| ()), expected);
                }
                Op::Find(v) => {
                    let v = i32::from(v);
                    assert_eq!(bst.find(v), set.contains(&v));
                }
                Op::Iter => {
                    assert!(bst.iter().eq(set.iter().copied()));
                }
            }
            assert_eq!(bst.len(), set.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.iter().eq(set.into_iter())
        }
    }

    quickcheck::quickcheck! {
        fn shape_survives_clone(xs: Vec<i8>) -> bool {
            let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
            let copy = tree.clone();

            copy.height() == tree.height()
                && copy.root() == tree.root()
                && xs.iter().all(|&x| copy.subtree(i32::from(x)) == tree.subtree(i32::from(x)))
        }
    }
}
