use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    /// Insert the value into the tree
    Insert(i8),
    /// Remove the value from the tree
    Remove(i8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(i8::arbitrary(g))
        } else {
            Op::Remove(i8::arbitrary(g))
        }
    }
}
