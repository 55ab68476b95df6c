//! The solvers in this crate register themselves and solve the worked examples

use advent_solutions as _;

use advent_solver::{Event, PuzzleId, SolverRegistryBuilder};

const CALORIES: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";
const STACKS: &str = "    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 \n\nmove 1 from 2 to 1\nmove 3 from 1 to 3\nmove 2 from 2 to 1\nmove 1 from 1 to 2\n";
const NAVIGATION: &str = "draai 90\nloop 6\nspring 2\ndraai -45\nloop 2\n";

fn answers(puzzle: PuzzleId, input: &str) -> Vec<String> {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let mut solver = registry.create_solver(puzzle, input).unwrap();
    (1..=solver.parts())
        .map(|part| solver.solve(part).unwrap().answer)
        .collect()
}

#[test]
fn test_all_solvers_registered_in_order() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let puzzles: Vec<PuzzleId> = registry.iter_info().map(|info| info.puzzle).collect();
    assert_eq!(
        puzzles,
        vec![
            PuzzleId::aoc(2022, 1),
            PuzzleId::aoc(2022, 5),
            PuzzleId::infi(2022, 1),
        ]
    );
    assert!(registry.iter_info().all(|info| info.parts == 2));
}

#[test]
fn test_calorie_counting() {
    assert_eq!(answers(PuzzleId::aoc(2022, 1), CALORIES), ["24000", "45000"]);
}

#[test]
fn test_supply_stacks() {
    assert_eq!(answers(PuzzleId::aoc(2022, 5), STACKS), ["CMZ", "MCD"]);
}

#[test]
fn test_navigation() {
    let answers = answers(PuzzleId::infi(2022, 1), NAVIGATION);
    assert_eq!(answers[0], "12");
    assert_eq!(answers[1], "         #\n        #\n###### #");
}

#[test]
fn test_tag_filtering() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"stacks"))
        .unwrap()
        .build();
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(PuzzleId::aoc(2022, 5)));

    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.puzzle.event == Event::Infi)
        .unwrap()
        .build();
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(PuzzleId::infi(2022, 1)));
}
