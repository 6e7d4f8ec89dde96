/// Which of the deletion cases removed a node. Returned by
/// [`Tree::delete`][crate::tree::Tree::delete].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The node had no children and was detached.
    Leaf,
    /// The node only had a left child, which took its place.
    LeftChild,
    /// The node only had a right child, which took its place.
    RightChild,
    /// The node had two children. Its in-order predecessor, holding the contained value,
    /// was spliced out and that value now sits where the deleted one was.
    Predecessor(i32),
}
