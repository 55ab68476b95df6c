//! Puzzle solutions with automatic registration
//!
//! Each solution derives `AutoRegisterSolver`, so linking this crate is enough
//! for `SolverRegistryBuilder::register_all_plugins` to find it.

pub mod infi;
pub mod year_2022;
