use advent_solver::{
    register_solver, DynSolver, Event, ParseError, PuzzleId, PuzzleParser, RegistrationError,
    SolveError, Solver, SolverError, SolverInstance, SolverRegistryBuilder,
};

struct Doubler;

impl PuzzleParser for Doubler {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {:?}", line)))
            })
            .collect()
    }
}

impl Solver for Doubler {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                // Mutates shared data so part 2 can observe it
                shared.iter_mut().for_each(|n| *n *= 2);
                Ok(shared.iter().sum::<u64>().to_string())
            }
            2 => Ok(shared.iter().max().copied().unwrap_or_default().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn registry_with_doubler() -> advent_solver::SolverRegistry {
    let mut builder = SolverRegistryBuilder::new();
    register_solver!(builder, Doubler, PuzzleId::aoc(2022, 1));
    builder.build()
}

#[test]
fn test_create_and_solve() {
    let registry = registry_with_doubler();
    let mut solver = registry
        .create_solver(PuzzleId::aoc(2022, 1), "1\n2\n3")
        .unwrap();

    assert_eq!(solver.puzzle(), PuzzleId::aoc(2022, 1));
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "12");
    // Part 2 sees the doubled values
    assert_eq!(solver.solve(2).unwrap().answer, "6");
}

#[test]
fn test_timing_is_ordered() {
    let registry = registry_with_doubler();
    let mut solver = registry
        .create_solver(PuzzleId::aoc(2022, 1), "4")
        .unwrap();

    assert!(solver.parse_end() >= solver.parse_start());
    let result = solver.solve(1).unwrap();
    assert!(result.duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_out_of_range_part() {
    let registry = registry_with_doubler();
    let mut solver = registry
        .create_solver(PuzzleId::aoc(2022, 1), "1")
        .unwrap();

    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_not_found() {
    let registry = registry_with_doubler();
    let result = registry.create_solver(PuzzleId::aoc(2022, 2), "1");
    assert!(matches!(result, Err(SolverError::NotFound(p)) if p == PuzzleId::aoc(2022, 2)));

    let result = registry.create_solver(PuzzleId::new(Event::Infi, 2022, 1), "1");
    assert!(matches!(result, Err(SolverError::NotFound(_))));
}

#[test]
fn test_parse_error_propagates() {
    let registry = registry_with_doubler();
    let result = registry.create_solver(PuzzleId::aoc(2022, 1), "1\nx");
    assert!(matches!(
        result,
        Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));
}

#[test]
fn test_duplicate_registration_rejected() {
    let puzzle = PuzzleId::aoc(2022, 1);
    let result = SolverRegistryBuilder::new()
        .register(puzzle, 2, move |input: &str| {
            Ok(Box::new(SolverInstance::<Doubler>::new(puzzle, input)?))
        })
        .unwrap()
        .register(puzzle, 2, move |input: &str| {
            Ok(Box::new(SolverInstance::<Doubler>::new(puzzle, input)?))
        });

    assert!(matches!(result, Err(RegistrationError::DuplicateSolver(p)) if p == puzzle));
}

#[test]
fn test_invalid_puzzle_rejected() {
    let puzzle = PuzzleId::aoc(2022, 26);
    let result = SolverRegistryBuilder::new().register(puzzle, 2, move |input: &str| {
        Ok(Box::new(SolverInstance::<Doubler>::new(puzzle, input)?))
    });

    assert!(matches!(result, Err(RegistrationError::InvalidPuzzle(_))));
}

#[test]
fn test_iter_info_in_puzzle_order() {
    let mut builder = SolverRegistryBuilder::new();
    register_solver!(builder, Doubler, PuzzleId::infi(2022, 1));
    register_solver!(builder, Doubler, PuzzleId::aoc(2022, 5));
    register_solver!(builder, Doubler, PuzzleId::aoc(2022, 1));
    let registry = builder.build();

    let puzzles: Vec<PuzzleId> = registry.iter_info().map(|info| info.puzzle).collect();
    assert_eq!(
        puzzles,
        vec![
            PuzzleId::aoc(2022, 1),
            PuzzleId::aoc(2022, 5),
            PuzzleId::infi(2022, 1),
        ]
    );
    assert_eq!(registry.get_info(PuzzleId::aoc(2022, 5)).unwrap().parts, 2);
    assert!(registry.get_info(PuzzleId::aoc(2022, 6)).is_none());
}
