#![allow(dead_code)]

use collection_tracking::{apply_operations, diff_with_options, DiffOptions, Operation, OperationKind};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing_subscriber::EnvFilter;

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

pub fn rng(seed: u64) -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(seed)
}

/// A string of length `0..max_len` drawn from `ALPHABET`.
pub fn random_string(rng: &mut impl Rng, max_len: usize) -> Vec<char> {
    let alphabet = chars(ALPHABET);
    let len = rng.gen_range(0..max_len);
    (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect()
}

/// Diffs, checks the option exclusions, replays and compares with `target`.
pub fn assert_round_trip<T>(source: &[T], target: &[T], options: DiffOptions) -> Vec<Operation<T>>
where
    T: Clone + PartialEq + std::fmt::Debug,
{
    let ops = diff_with_options(source, target, options);
    if !options.allow_move {
        assert!(
            ops.iter().all(|op| op.kind() != OperationKind::Move),
            "move emitted with moves disabled: {ops:?}"
        );
    }
    if !options.allow_replace {
        assert!(
            ops.iter().all(|op| op.kind() != OperationKind::Replace),
            "replace emitted with replaces disabled: {ops:?}"
        );
    }
    let mut list = source.to_vec();
    apply_operations(&mut list, &ops).unwrap_or_else(|err| panic!("replay of {ops:?} failed: {err}"));
    assert_eq!(list, target, "script {ops:?} from {source:?}");
    ops
}

pub fn assert_all_kind(ops: &[Operation<char>], kind: OperationKind, count: Option<usize>) {
    assert!(ops.iter().all(|op| op.kind() == kind), "expected only {kind}: {ops:?}");
    if let Some(count) = count {
        assert_eq!(ops.len(), count, "{ops:?}");
    }
}
