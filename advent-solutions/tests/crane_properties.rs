//! Property-based tests for the crane simulation

use advent_solutions::year_2022::day_05::{
    column_count, CraneModel, Crate, Move, Stack, StackStore,
};
use proptest::prelude::*;

fn arb_store() -> impl Strategy<Value = StackStore> {
    prop::collection::vec(prop::collection::vec(prop::char::range('A', 'Z'), 0..8), 1..6)
        .prop_map(|stacks| {
            stacks
                .into_iter()
                .map(|labels| labels.into_iter().map(Crate).collect::<Stack>())
                .collect::<StackStore>()
        })
}

/// Moves between existing stacks; some may ask for more crates than there are
fn arb_moves(count: usize) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(
        (1usize..5, 1..=count, 1..=count).prop_map(|(quantity, from, to)| Move {
            quantity,
            from,
            to,
        }),
        0..30,
    )
}

fn arb_store_and_moves() -> impl Strategy<Value = (StackStore, Vec<Move>)> {
    arb_store().prop_flat_map(|store| {
        let count = store.len();
        (Just(store), arb_moves(count))
    })
}

fn arb_model() -> impl Strategy<Value = CraneModel> {
    prop_oneof![Just(CraneModel::CrateMover9000), Just(CraneModel::CrateMover9001)]
}

fn sorted_labels(store: &StackStore) -> Vec<char> {
    let mut labels: Vec<char> = store
        .stacks()
        .iter()
        .flat_map(|s| s.crates().iter().map(|c| c.label()))
        .collect();
    labels.sort_unstable();
    labels
}

fn top_labels(store: &StackStore, index: usize, quantity: usize) -> Vec<char> {
    let crates = store.stack(index).unwrap().crates();
    crates[crates.len() - quantity..]
        .iter()
        .map(|c| c.label())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// No move creates or destroys crates, whether it succeeds or fails
    #[test]
    fn prop_crates_are_conserved((store, moves) in arb_store_and_moves(), model in arb_model()) {
        let before = sorted_labels(&store);
        let mut stacks = store.clone();
        for step in moves {
            let snapshot = stacks.clone();
            if model.apply(&mut stacks, step).is_err() {
                prop_assert_eq!(&stacks, &snapshot);
            }
            prop_assert_eq!(stacks.crate_count(), store.crate_count());
        }
        prop_assert_eq!(sorted_labels(&stacks), before);
    }

    /// CrateMover 9000 lands the group reversed, 9001 keeps its order
    #[test]
    fn prop_group_order((store, moves) in arb_store_and_moves()) {
        for step in moves {
            let available = store.stack(step.from).unwrap().height();
            if step.from == step.to || step.quantity > available {
                continue;
            }
            let group = top_labels(&store, step.from, step.quantity);

            let mut single = store.clone();
            CraneModel::CrateMover9000.apply(&mut single, step).unwrap();
            let mut reversed = group.clone();
            reversed.reverse();
            prop_assert_eq!(top_labels(&single, step.to, step.quantity), reversed);

            let mut whole = store.clone();
            CraneModel::CrateMover9001.apply(&mut whole, step).unwrap();
            prop_assert_eq!(top_labels(&whole, step.to, step.quantity), group);
        }
    }

    /// Reading the tops is a pure read
    #[test]
    fn prop_top_read_is_idempotent(store in arb_store()) {
        let before = store.clone();
        let first = store.top_crates();
        let second = store.top_crates();
        prop_assert_eq!(first, second);
        prop_assert_eq!(store, before);
    }

    /// A row of n stacks is 4n - 1 characters wide
    #[test]
    fn prop_column_count(n in 1usize..200) {
        prop_assert_eq!(column_count(4 * n - 1), n);
    }
}

#[test]
fn test_column_count_of_example_row() {
    assert_eq!(column_count("[Z] [M] [P]".len()), 3);
}
