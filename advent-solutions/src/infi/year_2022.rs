//! Infi 2022, "Navigation woes": follow turn/walk/jump instructions, report
//! how far the end point is from the start and read the word left by the
//! footprints.

use advent_solver::{
    AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError,
};
use anyhow::{anyhow, bail, ensure, Context};
use itertools::Itertools;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(event = "infi", year = 2022, day = 1, tags = ["infi", "walker"])]
pub struct Navigation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance from the origin, `None` if it does not fit in a `u64`
    pub fn manhattan(self) -> Option<u64> {
        self.x.unsigned_abs().checked_add(self.y.unsigned_abs())
    }

    fn step(self, heading: Heading, steps: i64) -> Option<Point> {
        let (dx, dy) = heading.delta();
        Some(Point::new(
            self.x.checked_add(dx.checked_mul(steps)?)?,
            self.y.checked_add(dy.checked_mul(steps)?)?,
        ))
    }
}

/// The eight compass headings, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Heading {
    const CLOCKWISE: [Heading; 8] = [
        Heading::North,
        Heading::NorthEast,
        Heading::East,
        Heading::SouthEast,
        Heading::South,
        Heading::SouthWest,
        Heading::West,
        Heading::NorthWest,
    ];

    /// Unit offset; diagonal steps move one square on both axes
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::NorthEast => (1, 1),
            Heading::East => (1, 0),
            Heading::SouthEast => (1, -1),
            Heading::South => (0, -1),
            Heading::SouthWest => (-1, -1),
            Heading::West => (-1, 0),
            Heading::NorthWest => (-1, 1),
        }
    }

    /// Turn clockwise by `eighths` of a full circle (negative turns left)
    pub fn turn(self, eighths: i64) -> Heading {
        let index = (self as i64 + eighths).rem_euclid(8);
        Self::CLOCKWISE[index as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Turn by a multiple of 45 degrees, stored as eighths of a circle
    Turn(i64),
    /// Step forward one square at a time, leaving a footprint on each
    Walk(i64),
    /// Leap forward, leaving a footprint only where it lands
    Jump(i64),
}

impl Instruction {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let (command, number) = line
            .split_whitespace()
            .collect_tuple()
            .ok_or_else(|| anyhow!("expected \"<command> <number>\", found {:?}", line))?;
        let number: i64 = number
            .parse()
            .with_context(|| format!("invalid number {:?}", number))?;

        match command {
            "draai" | "turn" => {
                ensure!(
                    number % 45 == 0,
                    "turn of {} degrees is not a multiple of 45",
                    number
                );
                Ok(Instruction::Turn(number / 45))
            }
            "loop" | "walk" => {
                ensure!(number >= 0, "cannot walk {} steps", number);
                Ok(Instruction::Walk(number))
            }
            "spring" | "jump" => {
                ensure!(number >= 0, "cannot jump {} steps", number);
                Ok(Instruction::Jump(number))
            }
            other => bail!("unknown command {:?}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Instruction (1-based) that would leave the representable grid
    #[error("instruction {0} walks off the grid")]
    OffGrid(usize),
    #[error("distance from {0:?} to the origin overflows")]
    TooFar(Point),
}

/// Where the walk ended and every square that got a footprint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail {
    pub end: Point,
    pub footprints: BTreeSet<Point>,
}

impl Trail {
    /// Footprints drawn as `#`, north at the top, trailing blanks trimmed
    pub fn render(&self) -> String {
        let Some((min_x, max_x)) = self.footprints.iter().map(|p| p.x).minmax().into_option()
        else {
            return String::new();
        };
        let (min_y, max_y) = self
            .footprints
            .iter()
            .map(|p| p.y)
            .minmax()
            .into_option()
            .unwrap_or((0, 0));

        (min_y..=max_y)
            .rev()
            .map(|y| {
                let row: String = (min_x..=max_x)
                    .map(|x| {
                        if self.footprints.contains(&Point::new(x, y)) {
                            '#'
                        } else {
                            ' '
                        }
                    })
                    .collect();
                row.trim_end().to_string()
            })
            .join("\n")
    }
}

/// Follow `instructions` from the origin, facing north
pub fn walk(instructions: &[Instruction]) -> Result<Trail, NavigationError> {
    let mut heading = Heading::North;
    let mut trail = Trail::default();

    for (index, instruction) in instructions.iter().enumerate() {
        let off_grid = NavigationError::OffGrid(index + 1);
        match *instruction {
            Instruction::Turn(eighths) => heading = heading.turn(eighths),
            Instruction::Walk(steps) => {
                // Bounds-check the whole walk before stepping through it
                trail.end.step(heading, steps).ok_or(off_grid.clone())?;
                for _ in 0..steps {
                    trail.end = trail.end.step(heading, 1).ok_or(off_grid.clone())?;
                    trail.footprints.insert(trail.end);
                }
            }
            Instruction::Jump(steps) => {
                trail.end = trail.end.step(heading, steps).ok_or(off_grid)?;
                trail.footprints.insert(trail.end);
            }
        }
    }
    Ok(trail)
}

#[derive(Debug)]
pub struct SharedData {
    instructions: Vec<Instruction>,
    trail: Option<Trail>,
}

impl PuzzleParser for Navigation {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                Instruction::parse(line).with_context(|| format!("line {}", line_idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|instructions| SharedData {
                instructions,
                trail: None,
            })
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Navigation {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let end = trail(shared)?.end;
        end.manhattan()
            .map(|distance| distance.to_string())
            .ok_or_else(|| SolveError::failed(NavigationError::TooFar(end)))
    }
}

impl PartSolver<2> for Navigation {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trail(shared)?.render())
    }
}

fn trail(shared: &mut SharedData) -> Result<&Trail, SolveError> {
    let trail = match shared.trail.take() {
        Some(trail) => trail,
        None => walk(&shared.instructions).map_err(SolveError::failed)?,
    };
    Ok(shared.trail.insert(trail))
}
