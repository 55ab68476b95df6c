//! Supply Stacks: replay a crane's rearrangement procedure over stacks of
//! crates and read the crate left on top of each stack.

mod crane;
mod parse;
mod stacks;

pub use crane::{CraneModel, Move};
pub use parse::column_count;
pub use stacks::{Crate, Stack, StackError, StackStore};

use advent_solver::{
    AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError,
};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2022, day = 5, tags = ["2022", "stacks", "simulation"])]
pub struct Day05;

/// Parsed puzzle: the drawn stacks and the moves to replay on them
#[derive(Debug, Clone)]
pub struct Procedure {
    pub initial: StackStore,
    pub moves: Vec<Move>,
}

impl Procedure {
    /// Parse the diagram and move list
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let (initial, moves) = parse::procedure(input)?;
        Ok(Self { initial, moves })
    }

    /// Replay every move on a copy of the initial stacks
    pub fn run(&self, model: CraneModel) -> Result<StackStore, StackError> {
        let mut stacks = self.initial.clone();
        model.rearrange(&mut stacks, &self.moves)?;
        Ok(stacks)
    }

    /// Top crate labels after the procedure, stack 1 first
    pub fn top_crates(&self, model: CraneModel) -> Result<String, StackError> {
        self.run(model)?.top_crates()
    }
}

impl PuzzleParser for Day05 {
    type SharedData<'a> = Procedure;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Procedure::parse(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Day05 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .top_crates(CraneModel::CrateMover9000)
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Day05 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .top_crates(CraneModel::CrateMover9001)
            .map_err(SolveError::failed)
    }
}
