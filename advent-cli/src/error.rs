//! Error types for the CLI

use advent_solver::PuzzleId;
use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Inputs absent from the input directory
    #[error("Missing {0} input file(s)")]
    MissingInputs(usize),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Input could not be read
    #[error("{puzzle}: {source}")]
    Input {
        puzzle: PuzzleId,
        #[source]
        source: InputError,
    },

    /// Parsing failed, so no part of the puzzle ran
    #[error("{puzzle}: {source}")]
    Parse {
        puzzle: PuzzleId,
        #[source]
        source: advent_solver::ParseError,
    },

    /// No solver instance could be created for a listed puzzle
    #[error("{puzzle}: {message}")]
    Unavailable { puzzle: PuzzleId, message: String },

    /// A part failed; the full error went out with its result
    #[error("{puzzle} Part {part}: {message}")]
    Solver {
        puzzle: PuzzleId,
        part: u8,
        message: String,
    },

    /// Multiple errors collected with `--keep-going`
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one
    ///
    /// `Multiple` on either side is flattened, so the result is never nested
    /// and keeps the order the errors occurred in.
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// The individual errors, flattening `Multiple`
    pub fn errors(&self) -> Vec<ArcExecutorError> {
        match self.inner() {
            ExecutorError::Multiple(v) => v.clone(),
            _ => vec![self.clone()],
        }
    }
}

/// Input directory errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file for the puzzle
    #[error("input file {} not found", .0.display())]
    Missing(PathBuf),

    /// Input file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(day: u8) -> ArcExecutorError {
        ExecutorError::Input {
            puzzle: PuzzleId::aoc(2022, day),
            source: InputError::Missing(PathBuf::from(format!("day{:02}.txt", day))),
        }
        .into()
    }

    fn days(error: &ArcExecutorError) -> Vec<u8> {
        error
            .errors()
            .iter()
            .map(|e| match e.inner() {
                ExecutorError::Input { puzzle, .. } => puzzle.day,
                other => panic!("unexpected {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_combine_singles() {
        let combined = ArcExecutorError::combine(missing(1), missing(2));
        assert_eq!(days(&combined), vec![1, 2]);
        assert_eq!(combined.to_string(), "Multiple errors occurred (2 total)");
    }

    #[test]
    fn test_combine_flattens() {
        let left = ArcExecutorError::combine(missing(1), missing(2));
        let right = ArcExecutorError::combine(missing(3), missing(4));
        assert_eq!(days(&ArcExecutorError::combine(left.clone(), right.clone())), vec![1, 2, 3, 4]);
        assert_eq!(days(&ArcExecutorError::combine(missing(0), right)), vec![0, 3, 4]);
        assert_eq!(days(&ArcExecutorError::combine(left, missing(5))), vec![1, 2, 5]);
    }

    #[test]
    fn test_combine_opt() {
        let first = ArcExecutorError::combine_opt(None, missing(1));
        assert_eq!(days(&first), vec![1]);
        let second = ArcExecutorError::combine_opt(Some(first), missing(2));
        assert_eq!(days(&second), vec![1, 2]);
    }

    #[test]
    fn test_messages_name_the_puzzle() {
        let message = missing(5).to_string();
        assert!(message.starts_with("aoc 2022/05"), "{}", message);
        assert!(message.contains("day05.txt"), "{}", message);
    }
}
