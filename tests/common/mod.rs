#![allow(dead_code)]

use arbor::*;
use rand::{self, Rng};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Something to perform in one round of tests
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Put { key: i32, value: i32 },
    Get { key: i32 },
    Remove { key: i32 },
    /// ceiling, floor, lower and higher of one key
    Neighbours { key: i32 },
    SubMap { from: i32, to: i32 },
}

type Entry = Option<(i32, i32)>;

fn owned(entry: Option<(&i32, &i32)>) -> Entry {
    entry.map(|(k, v)| (*k, *v))
}

/// The result after one round
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
enum RoundResult {
    Value(Option<i32>),
    Neighbours([Entry; 4]),
    Entries(Vec<(i32, i32)>),
}

const MAX_KEY: i32 = 300;

fn random_round_action(rng: &mut rand::prelude::ThreadRng) -> RoundAction {
    use RoundAction::*;
    let key = rng.gen_range(-MAX_KEY..=MAX_KEY);
    match rng.gen_range(0..5) {
        0 => Put {
            key,
            value: rng.gen(),
        },
        1 => Get { key },
        2 => Remove { key },
        3 => Neighbours { key },
        4 => SubMap {
            from: key,
            to: rng.gen_range(-MAX_KEY..=MAX_KEY),
        },
        _ => {
            panic!()
        }
    }
}

fn run_round<B: Balancer>(
    round_action: RoundAction,
    map: &mut TreeMap<i32, i32, B>,
) -> RoundResult {
    use RoundAction::*;
    use RoundResult::{Entries, Value};

    match round_action {
        Put { key, value } => Value(map.put(key, value).unwrap()),
        Get { key } => Value(map.get(&key).unwrap().copied()),
        Remove { key } => Value(map.remove(&key).unwrap()),
        Neighbours { key } => RoundResult::Neighbours([
            owned(map.ceiling_entry(&key).unwrap()),
            owned(map.floor_entry(&key).unwrap()),
            owned(map.lower_entry(&key).unwrap()),
            owned(map.higher_entry(&key).unwrap()),
        ]),
        SubMap { from, to } => Entries(
            map.sub_map(&from, &to)
                .unwrap()
                .into_iter()
                .map(|(k, v)| (*k, *v))
                .collect(),
        ),
    }
}

fn run_model_round(round_action: RoundAction, model: &mut BTreeMap<i32, i32>) -> RoundResult {
    use RoundAction::*;
    use RoundResult::{Entries, Value};

    match round_action {
        Put { key, value } => Value(model.insert(key, value)),
        Get { key } => Value(model.get(&key).copied()),
        Remove { key } => Value(model.remove(&key)),
        Neighbours { key } => RoundResult::Neighbours([
            owned(model.range(key..).next()),
            owned(model.range(..=key).next_back()),
            owned(model.range(..key).next_back()),
            owned(
                model
                    .range((Bound::Excluded(key), Bound::Unbounded))
                    .next(),
            ),
        ]),
        SubMap { from, to } if from < to => {
            Entries(model.range(from..to).map(|(k, v)| (*k, *v)).collect())
        }
        SubMap { .. } => Entries(vec![]),
    }
}

/// Runs `round_actions` on `map` and on a `BTreeMap`, comparing every result.
/// After each round, the map must pass `assert_correctness` and `invariant`.
pub fn check_rounds<B, I>(
    map: &mut TreeMap<i32, i32, B>,
    round_actions: I,
    invariant: impl Fn(&TreeMap<i32, i32, B>) -> bool,
) where
    B: Balancer,
    I: IntoIterator<Item = RoundAction>,
{
    let mut model: BTreeMap<i32, i32> = map.iter().map(|(k, v)| (*k, *v)).collect();
    for round_action in round_actions {
        let res1 = run_round(round_action, map);
        let res2 = run_model_round(round_action, &mut model);
        assert_eq!(res1, res2, "after {:?}", round_action);
        assert_eq!(map.len(), model.len());
        // `O(n)` per round, but the maps in these tests stay small
        map.assert_correctness();
        assert!(invariant(map), "invariant broken after {:?}", round_action);
    }
    assert!(map.iter().map(|(k, v)| (*k, *v)).eq(model.into_iter()));
}

const INITIAL_SIZE: i32 = 200;

/// Fills `map` with `INITIAL_SIZE` entries and runs `num_rounds` random rounds on it.
pub fn check_consistency<B: Balancer>(
    mut map: TreeMap<i32, i32, B>,
    num_rounds: usize,
    invariant: impl Fn(&TreeMap<i32, i32, B>) -> bool,
) {
    let _ = pretty_env_logger::try_init();
    let mut rng = rand::thread_rng();
    for k in 0..INITIAL_SIZE {
        map.put(k * 3 - MAX_KEY, k).unwrap();
    }
    let rounds: Vec<_> = (0..num_rounds)
        .map(|_| random_round_action(&mut rng))
        .collect();
    check_rounds(&mut map, rounds, invariant);
}
