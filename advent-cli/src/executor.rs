//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use advent_solver::{DynSolver, Event, ParseError, PuzzleId, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub puzzle: PuzzleId,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Parse time, reported with the first part run on a parsed input only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub puzzle: PuzzleId,
    pub parts: RangeInclusive<u8>,
}

/// Which registered solvers and parts to run
#[derive(Debug, Clone, Copy, Default)]
pub struct Filters {
    pub event: Option<Event>,
    pub year: Option<u16>,
    pub day: Option<u8>,
    pub part: Option<u8>,
}

impl From<&Config> for Filters {
    fn from(config: &Config) -> Self {
        Self {
            event: config.event_filter,
            year: config.year_filter,
            day: config.day_filter,
            part: config.part_filter,
        }
    }
}

/// Runs work items one after another in puzzle order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    filters: Filters,
    keep_going: bool,
}

impl Executor {
    pub fn new(registry: SolverRegistry, inputs: InputStore, filters: Filters) -> Self {
        Self {
            registry,
            inputs,
            filters,
            keep_going: false,
        }
    }

    /// Collect errors and carry on instead of stopping at the first failure
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let filters = &self.filters;
        self.registry
            .iter_info()
            .filter(|info| filters.event.is_none_or(|e| info.puzzle.event == e))
            .filter(|info| filters.year.is_none_or(|y| info.puzzle.year == y))
            .filter(|info| filters.day.is_none_or(|d| info.puzzle.day == d))
            .map(|info| WorkItem {
                puzzle: info.puzzle,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.filters.part {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Work items whose input file is absent
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<WorkItem> {
        work_items
            .iter()
            .filter(|w| !self.inputs.contains(w.puzzle))
            .cloned()
            .collect()
    }

    /// Execute all work items, handing each result to `on_result` as soon as
    /// it is available
    ///
    /// Without `keep_going` the first failure ends the run; its result is
    /// still delivered first.
    pub fn execute<F>(&self, mut on_result: F) -> Result<(), ArcExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let mut collected_error: Option<ArcExecutorError> = None;
        for work in self.collect_work_items() {
            if let Err(e) = self.run_solver(&work, &mut on_result) {
                if !self.keep_going {
                    return Err(e);
                }
                collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
            }
        }
        collected_error.map_or(Ok(()), Err)
    }

    /// Run the parts of one work item
    fn run_solver<F>(&self, work: &WorkItem, on_result: &mut F) -> Result<(), ArcExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let puzzle = work.puzzle;
        let input = self
            .inputs
            .read(puzzle)
            .map_err(|source| ExecutorError::Input { puzzle, source })?;

        let mut solver = match self.registry.create_solver(puzzle, &input) {
            Ok(solver) => solver,
            Err(SolverError::ParseError(source)) => {
                for part in work.parts.clone() {
                    on_result(make_error_result(puzzle, part, source.clone()));
                }
                return Err(ExecutorError::Parse { puzzle, source }.into());
            }
            Err(e) => {
                return Err(ExecutorError::Unavailable {
                    puzzle,
                    message: e.to_string(),
                }
                .into());
            }
        };

        let mut collected_error: Option<ArcExecutorError> = None;
        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let result = solve_part_internal(puzzle, part, &mut *solver, parse_duration.take());
            let failure = result.answer.as_ref().err().map(|e| {
                ArcExecutorError::from(ExecutorError::Solver {
                    puzzle,
                    part,
                    message: e.to_string(),
                })
            });
            on_result(result);

            if let Some(e) = failure {
                if !self.keep_going {
                    return Err(e);
                }
                collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
            }
        }
        collected_error.map_or(Ok(()), Err)
    }
}

/// Create an error result for a puzzle whose input failed to parse
fn make_error_result(puzzle: PuzzleId, part: u8, error: ParseError) -> SolverResult {
    SolverResult {
        puzzle,
        part,
        answer: Err(SolverError::ParseError(error)),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Solve a single part
fn solve_part_internal(
    puzzle: PuzzleId,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    match solver.solve(part) {
        Ok(result) => SolverResult {
            puzzle,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            puzzle,
            part,
            answer: Err(e.into()),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::{
        PartSolver, PuzzleParser, PuzzleSolver, RegisterableSolver, SolveError,
        SolverRegistryBuilder,
    };
    use std::fs;
    use tempfile::TempDir;

    /// Part 1 counts lines, part 2 fails on inputs containing "fail"
    #[derive(PuzzleSolver)]
    #[solver(parts = 2)]
    struct Lines;

    impl PuzzleParser for Lines {
        type SharedData<'a> = Vec<&'a str>;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            if input.starts_with('!') {
                return Err(ParseError::InvalidFormat("bang".to_string()));
            }
            Ok(input.lines().collect())
        }
    }

    impl PartSolver<1> for Lines {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.len().to_string())
        }
    }

    impl PartSolver<2> for Lines {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            if shared.contains(&"fail") {
                return Err(SolveError::SolveFailed("told to fail".into()));
            }
            Ok(shared.join("+"))
        }
    }

    const PUZZLES: [PuzzleId; 3] = [
        PuzzleId::aoc(2022, 1),
        PuzzleId::aoc(2022, 5),
        PuzzleId::infi(2022, 1),
    ];

    fn registry() -> SolverRegistry {
        PUZZLES
            .into_iter()
            .try_fold(SolverRegistryBuilder::new(), |builder, puzzle| {
                Lines.register_with(builder, puzzle)
            })
            .unwrap()
            .build()
    }

    fn write_input(temp: &TempDir, puzzle: PuzzleId, content: &str) {
        let path = InputStore::new(temp.path().to_path_buf()).path(puzzle);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn executor(temp: &TempDir, filters: Filters) -> Executor {
        Executor::new(
            registry(),
            InputStore::new(temp.path().to_path_buf()),
            filters,
        )
    }

    fn run(executor: &Executor) -> (Vec<SolverResult>, Result<(), ArcExecutorError>) {
        let mut results = Vec::new();
        let outcome = executor.execute(|r| results.push(r));
        (results, outcome)
    }

    #[test]
    fn test_work_items_in_puzzle_order() {
        let temp = TempDir::new().unwrap();
        let items = executor(&temp, Filters::default()).collect_work_items();
        let puzzles: Vec<_> = items.iter().map(|w| w.puzzle).collect();
        assert_eq!(puzzles, PUZZLES);
        assert!(items.iter().all(|w| w.parts == (1..=2)));
    }

    #[test]
    fn test_filters() {
        let temp = TempDir::new().unwrap();
        let filters = Filters {
            event: Some(Event::Infi),
            ..Filters::default()
        };
        let items = executor(&temp, filters).collect_work_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].puzzle, PuzzleId::infi(2022, 1));

        let filters = Filters {
            day: Some(5),
            part: Some(2),
            ..Filters::default()
        };
        let items = executor(&temp, filters).collect_work_items();
        assert_eq!(
            items,
            vec![WorkItem {
                puzzle: PuzzleId::aoc(2022, 5),
                parts: 2..=2
            }]
        );

        let filters = Filters {
            part: Some(3),
            ..Filters::default()
        };
        assert!(executor(&temp, filters).collect_work_items().is_empty());
    }

    #[test]
    fn test_missing_inputs() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, PuzzleId::aoc(2022, 5), "a\n");
        let executor = executor(&temp, Filters::default());
        let missing: Vec<_> = executor
            .missing_inputs(&executor.collect_work_items())
            .into_iter()
            .map(|w| w.puzzle)
            .collect();
        assert_eq!(missing, vec![PuzzleId::aoc(2022, 1), PuzzleId::infi(2022, 1)]);
    }

    #[test]
    fn test_all_parts_in_order() {
        let temp = TempDir::new().unwrap();
        for puzzle in PUZZLES {
            write_input(&temp, puzzle, "a\nb\n");
        }
        let (results, outcome) = run(&executor(&temp, Filters::default()));
        assert!(outcome.is_ok());

        let order: Vec<_> = results.iter().map(|r| (r.puzzle, r.part)).collect();
        assert_eq!(
            order,
            PUZZLES
                .iter()
                .flat_map(|&p| [(p, 1), (p, 2)])
                .collect::<Vec<_>>()
        );
        assert_eq!(results[0].answer.as_ref().unwrap(), "2");
        assert_eq!(results[1].answer.as_ref().unwrap(), "a+b");
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_fail_fast_stops_after_first_failure() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, PuzzleId::aoc(2022, 1), "fail\n");
        write_input(&temp, PuzzleId::aoc(2022, 5), "a\n");
        write_input(&temp, PuzzleId::infi(2022, 1), "a\n");

        let (results, outcome) = run(&executor(&temp, Filters::default()));
        assert_eq!(results.len(), 2);
        assert!(results[1].answer.is_err());
        let error = outcome.unwrap_err();
        assert!(error.to_string().contains("aoc 2022/01 Part 2"), "{}", error);
    }

    #[test]
    fn test_keep_going_collects_all_failures() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, PuzzleId::aoc(2022, 1), "fail\n");
        write_input(&temp, PuzzleId::aoc(2022, 5), "!\n");

        let executor = executor(&temp, Filters::default()).keep_going(true);
        let (results, outcome) = run(&executor);

        // 2 results for day 1, 2 parse failures for day 5, none for the
        // infi puzzle whose input is missing
        assert_eq!(results.len(), 4);
        assert_eq!(results.iter().filter(|r| r.answer.is_ok()).count(), 1);

        let error = outcome.unwrap_err();
        let errors = error.errors();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0].inner(), ExecutorError::Solver { part: 2, .. }));
        assert!(matches!(errors[1].inner(), ExecutorError::Parse { .. }));
        assert!(matches!(errors[2].inner(), ExecutorError::Input { .. }));
    }
}
