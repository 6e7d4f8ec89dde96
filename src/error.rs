//! Error types for the tree, the loader, and the shell.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A rejected tree operation. The tree is always left exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The value is already stored in the tree.
    #[error("{0} is already in the tree, duplicates are not allowed")]
    Duplicate(i32),
    /// The operation needs at least one node.
    #[error("the tree is empty")]
    Empty,
    /// No node holds the value.
    #[error("{0} was not found in the tree")]
    NotFound(i32),
}

/// Failure to load integers into a tree.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// The path that was tried.
        path: PathBuf,
        /// Why opening failed.
        #[source]
        source: io::Error,
    },
    /// Reading from an already opened source failed.
    #[error("read failed: {0}")]
    Read(#[from] io::Error),
}

/// Failure of the interactive shell. Invalid user input is re-prompted and never ends up
/// here, only broken streams do.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Reading the input or writing the output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}
