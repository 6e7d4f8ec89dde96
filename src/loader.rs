//! Loading whitespace-separated integers into a [`Tree`].
//!
//! Values are inserted in file order as they are read. Reading stops at the first token that
//! isn't an integer; everything before it stays in the tree.
//!
//! # Examples
//!
//! ```
//! use bst_menu::loader::{self, LoadReport};
//! use bst_menu::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let report = loader::load_reader(&mut tree, "50 30\n70 30\nend 90\n".as_bytes()).unwrap();
//!
//! assert_eq!(report, LoadReport { inserted: 3, duplicates: 1, stopped_at_line: Some(3) });
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [30, 50, 70]);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::error::LoadError;
use crate::tree::Tree;

/// What a load did to the tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Values that were added.
    pub inserted: usize,
    /// Values that were already present and were skipped.
    pub duplicates: usize,
    /// 1-based line of the token that ended the load early, if one wasn't an integer.
    pub stopped_at_line: Option<usize>,
}

/// Opens `path` and loads it with [`load_reader`].
#[instrument(skip(tree))]
pub fn load_file(tree: &mut Tree, path: &Path) -> Result<LoadReport, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let report = load_reader(tree, BufReader::new(file))?;
    info!(inserted = report.inserted, duplicates = report.duplicates, "loaded");
    Ok(report)
}

/// Inserts every integer read from `reader`, in order, until the end of input or the first
/// token that isn't an integer. An empty source inserts nothing.
#[instrument(skip_all)]
pub fn load_reader<R: BufRead>(tree: &mut Tree, reader: R) -> Result<LoadReport, LoadError> {
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let Ok(value) = token.parse() else {
                warn!(line = index + 1, token, "not an integer, stopped reading");
                report.stopped_at_line = Some(index + 1);
                return Ok(report);
            };

            match tree.insert(value) {
                Ok(()) => report.inserted += 1,
                Err(_) => report.duplicates += 1,
            }
        }
    }

    Ok(report)
}
