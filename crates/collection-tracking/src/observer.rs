//! Step-by-step inspection of a running diff.
//!
//! [`diff_with_observer`](crate::diff_with_observer) calls
//! [`DiffObserver::on_step`] after every step of its main loop. The default
//! observer does nothing; [`ConsistencyCheck`] replays the in-progress
//! script after each step, which is handy when investigating a wrong
//! result.

use tracing::warn;

use crate::apply::apply_operations;
use crate::operation::Operation;

/// What a single step of the diff did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Both heads matched and were consumed; nothing was emitted.
    Equal,
    /// An `Insert` was emitted (possibly provisional).
    Insert,
    /// A `Remove` was emitted (possibly provisional).
    Remove,
    /// An earlier `Insert` or `Remove` was rewritten into a `Move`.
    Move,
}

/// Snapshot handed to a [`DiffObserver`] after a step.
#[derive(Debug)]
pub struct DiffStep<'a, T> {
    pub kind: StepKind,
    /// The element the step resolved.
    pub item: &'a T,
    /// Position in the target built so far.
    pub cursor: usize,
    /// The raw script so far, before coalescing.
    pub script: &'a [Operation<T>],
    pub remaining_source: &'a [T],
    pub remaining_target: &'a [T],
}

pub trait DiffObserver<T> {
    fn on_step(&mut self, step: &DiffStep<'_, T>) {
        let _ = step;
    }
}

/// Observer that ignores every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<T> DiffObserver<T> for NoopObserver {}

impl<T, O: DiffObserver<T> + ?Sized> DiffObserver<T> for &mut O {
    fn on_step(&mut self, step: &DiffStep<'_, T>) {
        (**self).on_step(step);
    }
}

/// A step after which the replayed script disagreed with the expected
/// intermediate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    /// Zero-based step number.
    pub step: usize,
    pub cursor: usize,
    pub reason: String,
}

/// Replays the in-progress script onto a copy of the source after every
/// step and checks that the result is the built target prefix followed by
/// the source elements not yet consumed.
///
/// Comparison uses `PartialEq`, regardless of the predicate given to the
/// diff. Each step costs a full replay, so this is for debugging only.
#[derive(Debug)]
pub struct ConsistencyCheck<'a, T> {
    source: &'a [T],
    target: &'a [T],
    steps: usize,
    divergences: Vec<Divergence>,
}

impl<'a, T> ConsistencyCheck<'a, T> {
    pub fn new(source: &'a [T], target: &'a [T]) -> Self {
        Self {
            source,
            target,
            steps: 0,
            divergences: Vec::new(),
        }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn divergences(&self) -> &[Divergence] {
        &self.divergences
    }

    pub fn is_consistent(&self) -> bool {
        self.divergences.is_empty()
    }
}

impl<T: Clone + PartialEq> DiffObserver<T> for ConsistencyCheck<'_, T> {
    fn on_step(&mut self, step: &DiffStep<'_, T>) {
        let number = self.steps;
        self.steps += 1;

        let built = self.target.len().checked_sub(step.remaining_target.len());
        let mut replayed = self.source.to_vec();
        let reason = match (built, apply_operations(&mut replayed, step.script)) {
            (None, _) => Some(format!(
                "{} target items remain but the checked target has {}",
                step.remaining_target.len(),
                self.target.len()
            )),
            (Some(_), Err(err)) => Some(format!("replay failed: {err}")),
            (Some(built), Ok(())) => {
                let expected = self.target[..built].iter().chain(step.remaining_source);
                if replayed.iter().ne(expected) {
                    Some("replayed list differs from built prefix + remaining source".to_string())
                } else if built != step.cursor {
                    Some(format!("cursor {} but {built} target items consumed", step.cursor))
                } else {
                    None
                }
            }
        };

        if let Some(reason) = reason {
            warn!(step = number, cursor = step.cursor, %reason, "diff diverged");
            self.divergences.push(Divergence {
                step: number,
                cursor: step.cursor,
                reason,
            });
        }
    }
}
