//! Crates, stacks and the indexed stack store

use std::fmt;
use thiserror::Error;

/// A single labelled crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Crate(pub char);

impl Crate {
    pub fn label(self) -> char {
        self.0
    }
}

impl fmt::Display for Crate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Failures while moving or reading crates
///
/// Stack indices are 1-based, as written in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack {stack} underflow: {requested} crate(s) requested, {available} available")]
    Underflow {
        stack: usize,
        requested: usize,
        available: usize,
    },
    #[error("no stack {index}, there are {count}")]
    NoSuchStack { index: usize, count: usize },
    #[error("stack {0} is empty, it has no top crate")]
    Empty(usize),
}

/// One column of crates, bottom first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack(Vec<Crate>);

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Crate on top, if any
    pub fn top(&self) -> Option<Crate> {
        self.0.last().copied()
    }

    /// Crate at `height` (0 = bottom)
    pub fn get(&self, height: usize) -> Option<Crate> {
        self.0.get(height).copied()
    }

    /// All crates, bottom to top
    pub fn crates(&self) -> &[Crate] {
        &self.0
    }

    pub fn push(&mut self, item: Crate) {
        self.0.push(item);
    }

    pub fn pop(&mut self) -> Option<Crate> {
        self.0.pop()
    }

    /// Remove the top `count` crates, keeping their order (bottom first)
    ///
    /// Returns `None` and leaves the stack untouched if it holds fewer than
    /// `count` crates.
    pub fn take_top(&mut self, count: usize) -> Option<Vec<Crate>> {
        let start = self.0.len().checked_sub(count)?;
        Some(self.0.split_off(start))
    }

    /// Place crates on top, first element lowest
    pub fn put_on_top(&mut self, crates: impl IntoIterator<Item = Crate>) {
        self.0.extend(crates);
    }
}

impl FromIterator<Crate> for Stack {
    fn from_iter<I: IntoIterator<Item = Crate>>(iter: I) -> Self {
        Stack(iter.into_iter().collect())
    }
}

impl From<&str> for Stack {
    /// Labels bottom to top, e.g. `"ZN"`
    fn from(labels: &str) -> Self {
        labels.chars().map(Crate).collect()
    }
}

/// The ship's stacks, addressed 1..=N
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackStore {
    stacks: Vec<Stack>,
}

impl StackStore {
    pub fn new(stacks: Vec<Stack>) -> Self {
        Self { stacks }
    }

    /// Number of stacks
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Snapshot of all stacks, stack 1 first
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Total number of crates across all stacks
    pub fn crate_count(&self) -> usize {
        self.stacks.iter().map(Stack::height).sum()
    }

    pub fn stack(&self, index: usize) -> Result<&Stack, StackError> {
        index
            .checked_sub(1)
            .and_then(|i| self.stacks.get(i))
            .ok_or(StackError::NoSuchStack {
                index,
                count: self.stacks.len(),
            })
    }

    pub(crate) fn stack_mut(&mut self, index: usize) -> Result<&mut Stack, StackError> {
        let count = self.stacks.len();
        index
            .checked_sub(1)
            .and_then(|i| self.stacks.get_mut(i))
            .ok_or(StackError::NoSuchStack { index, count })
    }

    /// Pop the top crate of stack `index`
    pub fn pop(&mut self, index: usize) -> Result<Crate, StackError> {
        self.stack_mut(index)?
            .pop()
            .ok_or(StackError::Underflow {
                stack: index,
                requested: 1,
                available: 0,
            })
    }

    pub fn push(&mut self, index: usize, item: Crate) -> Result<(), StackError> {
        self.stack_mut(index)?.push(item);
        Ok(())
    }

    /// Concatenated top labels of stacks 1..=N
    ///
    /// Read-only. An empty stack has no top label and is reported as
    /// [`StackError::Empty`] instead of being skipped.
    pub fn top_crates(&self) -> Result<String, StackError> {
        self.stacks
            .iter()
            .enumerate()
            .map(|(i, stack)| stack.top().map(Crate::label).ok_or(StackError::Empty(i + 1)))
            .collect()
    }
}

impl FromIterator<Stack> for StackStore {
    fn from_iter<I: IntoIterator<Item = Stack>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for StackStore {
    /// Draws the store in the puzzle's diagram format, footer included.
    /// Rows are padded to full width so the output parses back unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tallest = self.stacks.iter().map(Stack::height).max().unwrap_or(0);
        for height in (0..tallest).rev() {
            for (i, stack) in self.stacks.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                match stack.get(height) {
                    Some(item) => write!(f, "{}", item)?,
                    None => f.write_str("   ")?,
                }
            }
            writeln!(f)?;
        }
        for i in 1..=self.stacks.len() {
            if i > 1 {
                f.write_str(" ")?;
            }
            write!(f, " {} ", i)?;
        }
        Ok(())
    }
}
