use std::collections::VecDeque;

use collection_tracking::{apply_operation, diff, diff_with_options, DiffOptions};
use collection_tracking_changes::{to_change, to_change_set, Change, ChangeReason, ChangeSet};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOP";

fn random_list(rng: &mut impl Rng) -> Vec<u8> {
    let len = rng.gen_range(0..20);
    (0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())]).collect()
}

/// Small edits to `list` so that consecutive states share most items.
fn evolve(rng: &mut impl Rng, list: &[u8]) -> Vec<u8> {
    let mut next = list.to_vec();
    for _ in 0..rng.gen_range(1..4) {
        match rng.gen_range(0..4) {
            0 if !next.is_empty() => {
                let at = rng.gen_range(0..next.len());
                next.remove(at);
            }
            1 if next.len() > 1 => {
                let from = rng.gen_range(0..next.len());
                let item = next.remove(from);
                let to = rng.gen_range(0..=next.len());
                next.insert(to, item);
            }
            2 if !next.is_empty() => {
                let at = rng.gen_range(0..next.len());
                next[at] = ALPHABET[rng.gen_range(0..ALPHABET.len())];
            }
            _ => {
                let at = rng.gen_range(0..=next.len());
                next.insert(at, ALPHABET[rng.gen_range(0..ALPHABET.len())]);
            }
        }
    }
    next
}

#[test]
fn change_events_track_operations_step_by_step() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0xC0FFEE);
    let mut previous = random_list(&mut rng);
    let mut by_operations = previous.clone();
    let mut by_changes: VecDeque<u8> = previous.iter().copied().collect();

    for step in 0..1000 {
        let target = if rng.gen_bool(0.2) {
            random_list(&mut rng)
        } else {
            evolve(&mut rng, &previous)
        };
        let options = DiffOptions::all()[step % 4];
        let ops = diff_with_options(&previous, &target, options);

        for op in &ops {
            let change = to_change(op).unwrap();
            apply_operation(&mut by_operations, op).unwrap();
            change.apply_to(&mut by_changes).unwrap();
            assert!(
                by_operations.iter().eq(by_changes.iter()),
                "step {step}: {op} and {change:?} disagree"
            );
        }
        assert_eq!(by_operations, target, "step {step}");
        previous = target;
    }
}

#[test]
fn whole_change_sets_replay_onto_a_deque() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(7);
    for _ in 0..1000 {
        let source = random_list(&mut rng);
        let target = evolve(&mut rng, &source);
        let set = to_change_set(&diff(&source, &target)).unwrap();

        let mut list: VecDeque<u8> = source.iter().copied().collect();
        set.replay(&mut list).unwrap();
        assert!(list.iter().eq(target.iter()));
        assert_eq!(
            source.len() + set.adds() - set.removes(),
            target.len(),
            "{set:?}"
        );
    }
}

#[test]
fn reasons_follow_operation_sizes() {
    let source: Vec<char> = "ABCDEFGH".chars().collect();
    let target: Vec<char> = "XYHABCG".chars().collect();
    let set = to_change_set(&diff(&source, &target)).unwrap();
    for change in &set {
        match change.reason() {
            ChangeReason::AddRange | ChangeReason::RemoveRange => assert!(change.count() > 1),
            _ => assert_eq!(change.count(), 1),
        }
    }
    let mut list = source.clone();
    set.replay(&mut list).unwrap();
    assert_eq!(list, target);
}

#[test]
fn change_sets_serialize_as_tagged_events() {
    let set = ChangeSet::new(vec![
        Change::Add { item: 'A', index: 0 },
        Change::Move {
            item: 'B',
            current_index: 0,
            previous_index: 2,
        },
    ]);
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"Add": {"item": "A", "index": 0}},
            {"Move": {"item": "B", "current_index": 0, "previous_index": 2}}
        ])
    );
    let back: ChangeSet<char> = serde_json::from_value(json).unwrap();
    assert_eq!(back, set);
}
