//! Puzzle Solver Library
//!
//! A small, type-safe framework for line-oriented puzzle solvers (Advent of
//! Code and the Infi side puzzle). Each puzzle is implemented as a solver with
//! its own input parsing and produces a string answer per part.
//!
//! # Overview
//!
//! This library provides:
//! - Traits for parsing input once and solving each part against the parsed data
//! - Type-erased solver instances with parse and solve timing
//! - A registry keyed by [`PuzzleId`], filled manually or from `inventory` plugins
//! - Derive macros that generate part dispatch and plugin registration
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{
//!     register_solver, ParseError, PartSolver, PuzzleId, PuzzleParser, PuzzleSolver,
//!     SolveError, SolverRegistryBuilder,
//! };
//!
//! #[derive(PuzzleSolver)]
//! #[solver(parts = 2)]
//! pub struct MyDay1;
//!
//! impl PuzzleParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let mut builder = SolverRegistryBuilder::new();
//! register_solver!(builder, MyDay1, PuzzleId::aoc(2023, 1));
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(PuzzleId::aoc(2023, 1), "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "3");
//! ```
//!
//! # Plugin Registration
//!
//! Use `#[derive(AutoRegisterSolver)]` to submit a solver to the plugin list:
//! ```ignore
//! #[derive(PuzzleSolver, AutoRegisterSolver)]
//! #[solver(parts = 2)]
//! #[puzzle(year = 2022, day = 5, tags = ["stacks"])]
//! pub struct Day05;
//! ```

mod error;
mod instance;
mod puzzle;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use puzzle::{BASE_YEAR, DAYS_PER_YEAR, Event, MAX_YEARS, PuzzleId};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use advent_solver_macros::{AutoRegisterSolver, PuzzleSolver};
