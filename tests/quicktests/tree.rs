use bst_menu::tree::Tree;
use bst_menu::{Deletion, TreeError};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops(ops: &[Op], bst: &mut Tree, set: &mut BTreeSet<i32>) {
    for op in ops {
        match *op {
            Op::Insert(v) => {
                let _ = bst.insert(i32::from(v));
                set.insert(i32::from(v));
            }
            Op::Remove(v) => {
                let _ = bst.delete(i32::from(v));
                set.remove(&i32::from(v));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter().copied())
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len() && tree.iter().eq(distinct.into_iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();

    xs.iter().all(|&x| tree.find(i32::from(x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|&x| !tree.find(i32::from(x)))
}

#[quickcheck]
fn reinsert_is_rejected(xs: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    let len = tree.len();
    let height = tree.height();

    xs.iter().all(|&x| tree.insert(i32::from(x)) == Err(TreeError::Duplicate(i32::from(x))))
        && tree.len() == len
        && tree.height() == height
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    for delete in &deletes {
        let before = tree.len();
        match tree.delete(i32::from(*delete)) {
            Ok(_) if tree.len() + 1 == before => {}
            Err(TreeError::NotFound(_) | TreeError::Empty) if tree.len() == before => {}
            _ => return false,
        }
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|&x| !tree.find(i32::from(x)))
        && still_present.iter().all(|&x| tree.find(i32::from(x)))
}

#[quickcheck]
fn two_child_deletion_promotes_predecessor(xs: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    let Some(root) = tree.root() else {
        return true;
    };
    let predecessor = tree.iter().take_while(|&v| v < root).last();

    match tree.delete(root) {
        Ok(Deletion::Predecessor(p)) => Some(p) == predecessor && tree.root() == Some(p),
        Ok(_) => tree.iter().all(|v| v != root),
        Err(_) => false,
    }
}

#[quickcheck]
fn clear_empties(xs: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    tree.clear();

    tree.is_empty() && tree.len() == 0 && tree.iter().next().is_none()
}

#[test]
fn worked_examples() {
    let tree: Tree = [50, 30, 70, 20, 40].into_iter().collect();
    assert_eq!(tree.iter().collect::<Vec<_>>(), [20, 30, 40, 50, 70]);
    assert_eq!(tree.len(), 5);

    let mut tree: Tree = [50, 30, 70].into_iter().collect();
    assert_eq!(tree.delete(50), Ok(Deletion::Predecessor(30)));
    assert_eq!(tree.root(), Some(30));
    assert_eq!(tree.iter().collect::<Vec<_>>(), [30, 70]);
    assert_eq!(tree.len(), 2);

    let mut tree = Tree::new();
    assert_eq!(tree.insert(10), Ok(()));
    assert_eq!(tree.insert(10), Err(TreeError::Duplicate(10)));
    assert_eq!(tree.len(), 1);

    let tree: Tree = [10, 20, 30].into_iter().collect();
    assert!(!tree.find(99));
    assert_eq!(tree.iter().collect::<Vec<_>>(), [10, 20, 30]);
}
