//! An unbalanced Binary Search Tree of unique integers, with a loader for whitespace-separated
//! integer files and a console menu to edit the tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root `Node` to a
//! leaf `Node`. This tree never rebalances, so its height depends entirely on insertion order:
//! inserting sorted values produces a tree that is really a list. BSTs naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Crate layout
//!
//! - [`tree`]: the tree itself.
//! - [`loader`]: fills a tree from a file or any reader.
//! - [`shell`]: the interactive `A`/`D`/`P`/`S`/`E` menu.
//! - [`config`]: shell display settings.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
mod error;
pub mod iter;
pub mod loader;
pub mod shell;
pub mod tree;
mod util;


pub use error::{LoadError, ShellError, TreeError};
pub use util::Deletion;
