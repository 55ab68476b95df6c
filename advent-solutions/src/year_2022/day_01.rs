//! Calorie Counting: sum each elf's snacks and find the best-stocked elves.

use advent_solver::{
    AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError,
};
use anyhow::anyhow;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use thiserror::Error;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2022, day = 1, tags = ["2022", "top-k"])]
pub struct Day01;

/// Calories carried by each elf, in input order
#[derive(Debug)]
pub struct SharedData {
    totals: Vec<u64>,
}

impl SharedData {
    pub fn totals(&self) -> &[u64] {
        &self.totals
    }
}

#[derive(Debug, Error)]
#[error("sum of the top {0} calorie totals overflows")]
pub struct SumOverflow(pub usize);

impl PuzzleParser for Day01 {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("no calorie counts in input".into()));
        }

        input
            .trim_end()
            .lines()
            .enumerate()
            .try_fold(vec![0u64], |mut totals, (line_idx, line)| {
                let line = line.trim();
                if line.is_empty() {
                    totals.push(0);
                    return Ok(totals);
                }
                let calories: u64 = line.parse().map_err(|_| {
                    anyhow!("(line {}) {:?} is not a number", line_idx + 1, line)
                })?;
                if let Some(last) = totals.last_mut() {
                    *last = last
                        .checked_add(calories)
                        .ok_or_else(|| anyhow!("(line {}) calorie total overflows", line_idx + 1))?;
                }
                Ok::<_, anyhow::Error>(totals)
            })
            .map(|totals| SharedData { totals })
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        top_k_sum(&shared.totals, 1)
            .map(|sum| sum.to_string())
            .ok_or_else(|| SolveError::failed(SumOverflow(1)))
    }
}

impl PartSolver<2> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        top_k_sum(&shared.totals, 3)
            .map(|sum| sum.to_string())
            .ok_or_else(|| SolveError::failed(SumOverflow(3)))
    }
}

/// Sum of the `k` largest values, `None` if it does not fit in a `u64`
///
/// Keeps a min-heap of at most `k` entries, so the smallest of the current
/// best is evicted first. Fewer than `k` values are all summed.
pub fn top_k_sum(values: &[u64], k: usize) -> Option<u64> {
    if k == 0 {
        return Some(0);
    }
    let mut best = BinaryHeap::with_capacity(k + 1);
    for &value in values {
        best.push(Reverse(value));
        if best.len() > k {
            best.pop();
        }
    }
    best.into_iter()
        .try_fold(0u64, |sum, Reverse(value)| sum.checked_add(value))
}
