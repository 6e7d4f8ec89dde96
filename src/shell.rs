//! The console menu driving a [`Tree`].
//!
//! The shell is generic over its input and output so the same code runs against the terminal
//! and against in-memory buffers. Invalid menu keys and non-positive integers are re-prompted
//! here and never reach the tree. Running out of input behaves like choosing `E`.
//!
//! # Examples
//!
//! ```
//! use bst_menu::config::ShellConfig;
//! use bst_menu::shell::Shell;
//! use bst_menu::tree::Tree;
//!
//! let tree: Tree = [50, 30, 70].into_iter().collect();
//! let input = "a\n20\np\ne\n".as_bytes();
//! let mut output = Vec::new();
//!
//! let mut shell = Shell::new(tree, input, &mut output, ShellConfig::default());
//! shell.run().unwrap();
//! assert_eq!(shell.tree().len(), 4);
//!
//! drop(shell);
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.contains("     20      30      50      70"));
//! ```

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::loader::{self, LoadReport};
use crate::tree::Tree;

const MENU: &str = "
Binary Search Tree Menu:
      A = Add An Integer to the Tree
      D = Delete An Integer from the Tree
      P = Print Out All Integers in the Tree
      S = Search for an Integer in the Tree
      E = Exit Program
";

const INVALID_INPUT: &str = "Error - invalid input!";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// `A`: add an integer.
    Add,
    /// `D`: delete an integer.
    Delete,
    /// `P`: print every integer in order.
    Print,
    /// `S`: search for an integer.
    Search,
    /// `E`: leave the menu.
    Exit,
}

impl Choice {
    /// Parses a line holding exactly one menu key, in either case.
    pub fn parse(line: &str) -> Option<Self> {
        let mut chars = line.trim().chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return None;
        };

        match key.to_ascii_uppercase() {
            'A' => Some(Self::Add),
            'D' => Some(Self::Delete),
            'P' => Some(Self::Print),
            'S' => Some(Self::Search),
            'E' => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Parses a strictly positive integer, the only values the menu accepts.
pub fn parse_positive(line: &str) -> Option<i32> {
    line.trim().parse().ok().filter(|&n: &i32| n > 0)
}

/// Interactive session over a tree.
pub struct Shell<R, W> {
    tree: Tree,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell that owns `tree` until [`Shell::into_tree`].
    pub fn new(tree: Tree, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            tree,
            input,
            output,
            config,
        }
    }

    /// The tree being edited.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Ends the session and hands the tree back.
    pub fn into_tree(self) -> Tree {
        self.tree
    }

    /// Asks for a filename until one opens, then reports the tree size. A file that holds
    /// something other than integers still counts as loaded: whatever came before the bad
    /// token is kept. Returns `None` if the input ends first.
    pub fn prompt_and_load(&mut self) -> Result<Option<LoadReport>, ShellError> {
        let mut prompt = "Enter a valid filename: ";
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };

            match loader::load_file(&mut self.tree, Path::new(line.trim())) {
                Ok(report) => {
                    if report.duplicates > 0 {
                        writeln!(
                            self.output,
                            "\n{} duplicates were not inserted.",
                            report.duplicates
                        )?;
                    }
                    self.report_count()?;
                    return Ok(Some(report));
                }
                Err(err) => {
                    warn!(%err, "load failed");
                    prompt = "\nError - invalid input!\n\nEnter a valid filename: ";
                }
            }
        }
    }

    /// Prints how many integers the tree holds.
    pub fn report_count(&mut self) -> Result<(), ShellError> {
        writeln!(
            self.output,
            "\nThere are {} integers in the binary search tree.",
            self.tree.len()
        )?;
        Ok(())
    }

    /// Runs the menu until `E` is chosen or the input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let choice = match self.read_choice()? {
                Some(choice) => choice,
                None => Choice::Exit,
            };
            debug!(?choice, "menu");

            match choice {
                Choice::Add => self.add()?,
                Choice::Delete => self.delete()?,
                Choice::Print => self.print()?,
                Choice::Search => self.search()?,
                Choice::Exit => {
                    writeln!(self.output, "\nExiting program!\n")?;
                    self.output.flush()?;
                    return Ok(());
                }
            }
        }
    }

    fn add(&mut self) -> Result<(), ShellError> {
        let Some(value) = self.read_positive("Enter an integer to add to the binary tree: ")? else {
            return Ok(());
        };

        match self.tree.insert(value) {
            Ok(()) => self.report_count(),
            Err(_) => {
                writeln!(
                    self.output,
                    "\n{value} is already in the list duplicates are not allowed."
                )?;
                Ok(())
            }
        }
    }

    fn delete(&mut self) -> Result<(), ShellError> {
        if self.tree.is_empty() {
            writeln!(self.output, "\nCannot delete from an empty binary tree!")?;
            return Ok(());
        }
        let Some(value) =
            self.read_positive("Enter an integer to delete from the binary tree: ")?
        else {
            return Ok(());
        };

        match self.tree.delete(value) {
            Ok(_) => self.report_count(),
            Err(_) => {
                writeln!(self.output, "\n{value} was not found in binary tree!")?;
                Ok(())
            }
        }
    }

    fn print(&mut self) -> Result<(), ShellError> {
        if self.tree.is_empty() {
            writeln!(self.output, "\nBinary search tree is empty.")?;
            return Ok(());
        }

        let width = self.config.field_width;
        writeln!(self.output, "\nValues stored in binary search tree are:")?;
        for value in self.tree.iter() {
            write!(self.output, "{value:>width$} ")?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn search(&mut self) -> Result<(), ShellError> {
        if self.tree.is_empty() {
            writeln!(self.output, "\nCannot search an empty tree.")?;
            return Ok(());
        }
        let Some(value) = self.read_positive("Enter an integer to find: ")? else {
            return Ok(());
        };

        let Some(subtree) = self.tree.subtree(value) else {
            writeln!(self.output, "\n{value} was not found in binary tree!")?;
            return Ok(());
        };

        let width = self.config.subtree_width;
        let child = |c: Option<i32>| c.map_or_else(|| "-".to_string(), |v| v.to_string());
        writeln!(
            self.output,
            "\nValues stored in subtree with root {value} are:\n{:>width$}{:>width$}{:>width$}",
            child(subtree.left),
            subtree.value,
            child(subtree.right),
        )?;
        Ok(())
    }

    /// Shows the menu until a valid key is entered. `None` means the input ended.
    fn read_choice(&mut self) -> Result<Option<Choice>, ShellError> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("\nEnter a selection: ")? else {
                return Ok(None);
            };

            match Choice::parse(&line) {
                Some(choice) => return Ok(Some(choice)),
                None => {
                    writeln!(
                        self.output,
                        "\n{INVALID_INPUT}\nPlease enter an A, D, P, S, or E"
                    )?;
                }
            }
        }
    }

    /// Prompts until a strictly positive integer is entered. `None` means the input ended.
    fn read_positive(&mut self, prompt: &str) -> Result<Option<i32>, ShellError> {
        loop {
            let Some(line) = self.prompt(&format!("\n{prompt}"))? else {
                return Ok(None);
            };

            match parse_positive(&line) {
                Some(value) => return Ok(Some(value)),
                None => {
                    writeln!(
                        self.output,
                        "\n{INVALID_INPUT}\nPlease enter a positive, non-zero integer"
                    )?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
