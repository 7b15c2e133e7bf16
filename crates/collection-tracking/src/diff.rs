//! Edit-script computation with move detection.
//!
//! The diff walks the source and target once, head against head. When the
//! heads differ it looks ahead in both remainders to decide whether the
//! source head is gone for good (remove), the target head is new or comes
//! from an earlier removal (insert or positive move), or both elements show
//! up again later (the crossing case, resolved provisionally and fixed up
//! when the counterpart is reached). A final pass coalesces neighbouring
//! single-item operations.
//!
//! The crossing-case rule is a heuristic: scripts are correct but not
//! always the shortest possible.

use tracing::{debug, trace};

use crate::observer::{DiffObserver, DiffStep, NoopObserver, StepKind};
use crate::operation::{Operation, OperationKind};
use crate::options::DiffOptions;

/// Edit script turning `source` into `target`, with default options.
///
/// ```
/// use collection_tracking::{apply_operations, diff, OperationKind};
///
/// let source = vec!['B', 'A'];
/// let target = vec!['A', 'B'];
/// let ops = diff(&source, &target);
/// assert_eq!(ops.len(), 1);
/// assert_eq!(ops[0].kind(), OperationKind::Move);
///
/// let mut list = source.clone();
/// apply_operations(&mut list, &ops).unwrap();
/// assert_eq!(list, target);
/// ```
pub fn diff<T>(source: &[T], target: &[T]) -> Vec<Operation<T>>
where
    T: PartialEq + Clone,
{
    diff_with_options(source, target, DiffOptions::default())
}

pub fn diff_with_options<T>(source: &[T], target: &[T], options: DiffOptions) -> Vec<Operation<T>>
where
    T: PartialEq + Clone,
{
    diff_by(source, target, options, |a, b| a == b)
}

/// Like [`diff_with_options`], comparing elements with `equals`.
///
/// `equals` must behave as an equivalence relation; otherwise the script is
/// unspecified (but the call still returns).
pub fn diff_by<T, F>(source: &[T], target: &[T], options: DiffOptions, equals: F) -> Vec<Operation<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    diff_with_observer(source, target, options, equals, NoopObserver)
}

/// Like [`diff_by`], reporting every step of the main pass to `observer`.
pub fn diff_with_observer<T, F, O>(
    source: &[T],
    target: &[T],
    options: DiffOptions,
    mut equals: F,
    mut observer: O,
) -> Vec<Operation<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
    O: DiffObserver<T>,
{
    let mut script = ScriptBuilder::new(options.allow_move);
    let mut source_rest = source;
    let mut target_rest = target;

    while let Some((target_item, target_tail)) = target_rest.split_first() {
        let (kind, item) = match source_rest.split_first() {
            None => {
                target_rest = target_tail;
                (script.positive_move_or_insert(target_item, &mut equals), target_item)
            }
            Some((source_item, source_tail)) => {
                if equals(target_item, source_item) {
                    target_rest = target_tail;
                    source_rest = source_tail;
                    script.advance();
                    (StepKind::Equal, source_item)
                } else {
                    // Positions are relative to the heads.
                    match position(target_tail, source_item, &mut equals) {
                        None => {
                            source_rest = source_tail;
                            (script.negative_move_or_remove(source_item, &mut equals), source_item)
                        }
                        Some(target_pos) => match position(source_tail, target_item, &mut equals) {
                            Some(source_pos) if target_pos > source_pos => {
                                // Expected to turn into a positive move later.
                                source_rest = source_tail;
                                script.push_remove(source_item);
                                (StepKind::Remove, source_item)
                            }
                            Some(_) => {
                                // Expected to turn into a negative move later.
                                target_rest = target_tail;
                                script.push_insert(target_item);
                                (StepKind::Insert, target_item)
                            }
                            None => {
                                target_rest = target_tail;
                                (script.positive_move_or_insert(target_item, &mut equals), target_item)
                            }
                        },
                    }
                }
            }
        };
        observer.on_step(&DiffStep {
            kind,
            item,
            cursor: script.cursor,
            script: &script.ops,
            remaining_source: source_rest,
            remaining_target: target_rest,
        });
    }

    while let Some((source_item, source_tail)) = source_rest.split_first() {
        source_rest = source_tail;
        let kind = script.negative_move_or_remove(source_item, &mut equals);
        observer.on_step(&DiffStep {
            kind,
            item: source_item,
            cursor: script.cursor,
            script: &script.ops,
            remaining_source: source_rest,
            remaining_target: target_rest,
        });
    }

    let raw_len = script.ops.len();
    let ops = coalesce(script.ops, options.allow_replace);
    debug!(
        source_len = source.len(),
        target_len = target.len(),
        raw_ops = raw_len,
        ops = ops.len(),
        "diff computed"
    );
    ops
}

fn position<T, F>(haystack: &[T], item: &T, equals: &mut F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    haystack.iter().position(|candidate| equals(candidate, item))
}

/// Working buffer of the main pass.
///
/// Operations stay single-item and mutable until [`coalesce`] runs; a
/// pending `Remove` or `Insert` is found again by scanning the buffer
/// backwards and rewritten in place.
struct ScriptBuilder<T> {
    ops: Vec<Operation<T>>,
    /// Position in the target built so far.
    cursor: usize,
    allow_move: bool,
}

impl<T: Clone> ScriptBuilder<T> {
    fn new(allow_move: bool) -> Self {
        Self {
            ops: Vec::new(),
            cursor: 0,
            allow_move,
        }
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    fn push_insert(&mut self, item: &T) {
        self.ops.push(Operation::insert(self.cursor, vec![item.clone()]));
        self.cursor += 1;
    }

    fn push_remove(&mut self, item: &T) {
        self.ops.push(Operation::remove(self.cursor, vec![item.clone()]));
    }

    /// Places `item` at the cursor, either by turning an earlier removal of
    /// an equal element into a move or by inserting it.
    fn positive_move_or_insert<F>(&mut self, item: &T, equals: &mut F) -> StepKind
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.allow_move && self.try_positive_move(item, equals) {
            self.cursor += 1;
            return StepKind::Move;
        }
        self.push_insert(item);
        StepKind::Insert
    }

    fn try_positive_move<F>(&mut self, item: &T, equals: &mut F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut inserts = 0;
        let mut removes = 0;
        for (at, op) in self.ops.iter_mut().enumerate().rev() {
            match op.kind {
                OperationKind::Insert => inserts += 1,
                OperationKind::Remove if equals(&op.items[0], item) => {
                    // Every later insert and removal shifted the destination.
                    let from = op.index;
                    let to = self.cursor + removes - inserts;
                    op.make_move(from, to);
                    trace!(at, from, to, "remove rewritten into move");
                    return true;
                }
                OperationKind::Remove => removes += 1,
                OperationKind::Replace | OperationKind::Move => {}
            }
        }
        false
    }

    /// Drops `item` from the source, either by turning an earlier insertion
    /// of an equal element into a move or by removing it at the cursor.
    fn negative_move_or_remove<F>(&mut self, item: &T, equals: &mut F) -> StepKind
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.allow_move && self.try_negative_move(item, equals) {
            return StepKind::Move;
        }
        self.push_remove(item);
        StepKind::Remove
    }

    fn try_negative_move<F>(&mut self, item: &T, equals: &mut F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut inserts = 0;
        let mut removes = 0;
        for (at, op) in self.ops.iter_mut().enumerate().rev() {
            match op.kind {
                OperationKind::Remove => removes += 1,
                OperationKind::Insert => {
                    // The matched insert counts too.
                    inserts += 1;
                    if equals(&op.items[0], item) {
                        let from = self.cursor + removes - inserts;
                        let to = op.index;
                        op.make_move(from, to);
                        trace!(at, from, to, "insert rewritten into move");
                        return true;
                    }
                }
                OperationKind::Replace | OperationKind::Move => {}
            }
        }
        false
    }
}

/// Merges neighbouring operations in one forward pass:
///
/// - inserts covering contiguous positions;
/// - removes at the same position;
/// - with `allow_replace`, a single-item remove followed by a single-item
///   insert at the same position, into a `Replace`.
fn coalesce<T>(ops: Vec<Operation<T>>, allow_replace: bool) -> Vec<Operation<T>> {
    let mut merged: Vec<Operation<T>> = Vec::with_capacity(ops.len());
    for next in ops {
        let Some(last) = merged.last_mut() else {
            merged.push(next);
            continue;
        };
        match (last.kind, next.kind) {
            (OperationKind::Insert, OperationKind::Insert) if last.index + last.items.len() == next.index => {
                last.items.extend(next.items);
            }
            (OperationKind::Remove, OperationKind::Remove) if last.index == next.index => {
                last.items.extend(next.items);
            }
            (OperationKind::Remove, OperationKind::Insert)
                if allow_replace && last.index == next.index && last.is_single() && next.is_single() =>
            {
                trace!(index = last.index, "remove and insert merged into replace");
                last.kind = OperationKind::Replace;
                last.previous_item = last.items.pop();
                last.items = next.items;
            }
            _ => merged.push(next),
        }
    }
    if allow_replace {
        split_replacements(merged)
    } else {
        merged
    }
}

/// Rewrites a remove of `n` items followed by an insert of `n` items at the
/// same position into `n` single-item replaces, one per overwritten slot.
fn split_replacements<T>(ops: Vec<Operation<T>>) -> Vec<Operation<T>> {
    let mut out = Vec::with_capacity(ops.len());
    let mut ops = ops.into_iter().peekable();
    while let Some(op) = ops.next() {
        let overwrites = op.kind == OperationKind::Remove
            && ops.peek().is_some_and(|next| {
                next.kind == OperationKind::Insert && next.index == op.index && next.items.len() == op.items.len()
            });
        match ops.next_if(|_| overwrites) {
            Some(insert) => {
                let start = op.index;
                let pairs = op.items.into_iter().zip(insert.items);
                for (offset, (previous, item)) in pairs.enumerate() {
                    out.push(Operation::replace(start + offset, previous, item));
                }
            }
            None => out.push(op),
        }
    }
    out
}
