//! Advent of Code 2022

pub mod day_01;
pub mod day_05;
