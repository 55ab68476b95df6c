//! Infi side puzzles

pub mod year_2022;
