mod common;
use common::*;

use arbor::*;

const NUM_ROUNDS: usize = 5_000;

#[test]
fn unbalanced_consistency() {
    check_consistency(BstMap::new(), NUM_ROUNDS, |_| true);
}

#[test]
fn treap_consistency() {
    check_consistency(TreapMap::new(), NUM_ROUNDS, |map| map.check_heap());
}

#[test]
fn avl_consistency() {
    check_consistency(AvlMap::new(), NUM_ROUNDS, |map| map.check_balance());
}

#[test]
fn splay_consistency() {
    check_consistency(SplayMap::new(), NUM_ROUNDS, |_| true);
}

#[test]
fn neighbour_rounds_match_the_model() {
    use RoundAction::*;
    let rounds = vec![
        Put { key: 10, value: 1 },
        Put { key: 30, value: 3 },
        Put { key: 20, value: 2 },
        Neighbours { key: 20 },
        Neighbours { key: 25 },
        Neighbours { key: 5 },
        Neighbours { key: 35 },
        Remove { key: 20 },
        Neighbours { key: 20 },
        SubMap { from: 0, to: 31 },
        Get { key: 30 },
    ];
    check_rounds(&mut BstMap::new(), rounds.clone(), |_| true);
    check_rounds(&mut TreapMap::new(), rounds.clone(), |map| map.check_heap());
    check_rounds(&mut AvlMap::new(), rounds.clone(), |map| map.check_balance());
    check_rounds(&mut SplayMap::new(), rounds, |_| true);
}

const KEYS: [i32; 9] = [10, 20, 60, 40, 70, 80, 90, 100, 200];
const VALUES: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];

fn walkthrough<B: Balancer>(
    mut map: TreeMap<i32, &'static str, B>,
) -> TreeMap<i32, &'static str, B> {
    for (k, v) in KEYS.iter().zip(VALUES.iter()) {
        assert_eq!(map.put(*k, *v), Ok(None));
    }
    assert_eq!(map.size(), 9);
    assert_eq!(map.remove(&200), Ok(Some("I")));
    assert_eq!(map.size(), 8);
    assert_eq!(map.get(&10), Ok(Some(&"A")));
    assert_eq!(map.get(&200), Ok(None));
    assert_eq!(map.ceiling_entry(&65), Ok(Some((&70, &"E"))));
    assert_eq!(map.floor_entry(&65), Ok(Some((&60, &"C"))));
    assert_eq!(map.lower_entry(&10), Ok(None));
    assert_eq!(map.higher_entry(&100), Ok(None));
    let window: Vec<i32> = map
        .sub_map(&20, &80)
        .unwrap()
        .into_iter()
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(window, vec![20, 40, 60, 70]);
    assert_eq!(map.put(40, "d"), Ok(Some("D")));
    assert_eq!(
        map.entry_set().map(|(_, v)| *v).collect::<Vec<_>>(),
        vec!["A", "B", "d", "C", "E", "F", "G", "H"]
    );
    map.assert_correctness();
    map
}

#[test]
fn walkthrough_for_every_balancer() {
    walkthrough(BstMap::new());
    assert!(walkthrough(TreapMap::new()).check_heap());
    assert!(walkthrough(AvlMap::new()).check_balance());
    walkthrough(SplayMap::new());
}

#[test]
fn reverse_order_with_a_comparator() {
    let mut map: TreeMap<String, usize, AvlBalancer, _> =
        TreeMap::with_comparator(FnOrder(|a: &String, b: &String| b.cmp(a)));
    for (i, word) in ["pear", "apple", "fig", "quince"].iter().enumerate() {
        map.put(word.to_string(), i).unwrap();
    }
    assert_eq!(
        map.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["quince", "pear", "fig", "apple"]
    );
    assert_eq!(
        map.first_entry().map(|(k, _)| k.as_str()),
        Some("quince")
    );
    // "higher" follows the map's order
    assert_eq!(
        map.higher_entry(&"fig".to_string()).unwrap().map(|(k, _)| k.as_str()),
        Some("apple")
    );
}

#[test]
fn floats_with_partial_order() {
    let mut map: TreeMap<f64, (), TreapBalancer, PartialOrder> =
        TreeMap::with_parts(TreapBalancer::seeded(9), PartialOrder);
    for x in [0.5, -1.25, 3.0] {
        map.put(x, ()).unwrap();
    }
    assert_eq!(map.put(f64::NAN, ()), Err(MapError::Incomparable));
    assert_eq!(map.ceiling_entry(&f64::NAN), Err(MapError::Incomparable));
    assert_eq!(map.sub_map(&f64::NAN, &1.0), Err(MapError::Incomparable));
    assert_eq!(map.len(), 3);
    assert_eq!(map.floor_entry(&1.0), Ok(Some((&0.5, &()))));
    assert!(map.check_heap());
}

#[test]
fn display_shows_the_tree() {
    let mut map = AvlMap::new();
    for k in 1..=3 {
        map.put(k, k * 10).unwrap();
    }
    assert_eq!(
        map.to_string(),
        "2 => 20 [2]\n  1 => 10 [1]\n    ·\n    ·\n  3 => 30 [1]\n    ·\n    ·\n"
    );
    assert_eq!(format!("{:?}", map), "{1: 10, 2: 20, 3: 30}");
}
