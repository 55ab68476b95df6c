//! CLI argument parsing using clap

use advent_solver::Event;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Puzzle event selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum EventArg {
    /// Advent of Code
    Aoc,
    /// Infi's side puzzle
    Infi,
}

impl From<EventArg> for Event {
    fn from(arg: EventArg) -> Self {
        match arg {
            EventArg::Aoc => Event::AdventOfCode,
            EventArg::Infi => Event::Infi,
        }
    }
}

/// Puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run the registered puzzle solvers", version)]
pub struct Args {
    /// Event to run (runs all events if omitted)
    #[arg(short, long, value_enum)]
    pub event: Option<EventArg>,

    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding the puzzle inputs
    #[arg(long, default_value = "input")]
    pub input_dir: PathBuf,

    /// Keep running after a failure and report every error at the end
    #[arg(short, long)]
    pub keep_going: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
