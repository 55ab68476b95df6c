//! Puzzle inputs read from the local input directory

use crate::error::InputError;
use advent_solver::{Event, PuzzleId};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-based store of puzzle inputs
///
/// Directory structure: `{root}/{year}/day{day:02}.txt` for Advent of Code and
/// `{root}/{event}/{year}/day{day:02}.txt` for every other event.
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the input path for a puzzle
    pub fn path(&self, puzzle: PuzzleId) -> PathBuf {
        let file = format!("day{:02}.txt", puzzle.day);
        match puzzle.event {
            Event::AdventOfCode => self.root.join(puzzle.year.to_string()).join(file),
            event => self
                .root
                .join(event.as_str())
                .join(puzzle.year.to_string())
                .join(file),
        }
    }

    /// Check if the input file exists
    pub fn contains(&self, puzzle: PuzzleId) -> bool {
        self.path(puzzle).is_file()
    }

    /// Read the input for a puzzle
    pub fn read(&self, puzzle: PuzzleId) -> Result<String, InputError> {
        let path = self.path(puzzle);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing(path),
            _ => InputError::Read { path, source },
        })
    }
}
