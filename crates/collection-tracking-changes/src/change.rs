//! Single change events.

use collection_tracking::{
    check_range, move_item, MutableList, Operation, OperationKind, TrackingError,
    TrackingResult,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Why a list changed, in the vocabulary of observable-collection bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeReason {
    Add,
    AddRange,
    Remove,
    RemoveRange,
    Replace,
    Move,
}

/// A change notification.
///
/// Single-item inserts and removes map to `Add`/`Remove`, multi-item ones to
/// the range variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change<T> {
    Add {
        item: T,
        index: usize,
    },
    AddRange {
        items: Vec<T>,
        index: usize,
    },
    Remove {
        item: T,
        index: usize,
    },
    RemoveRange {
        items: Vec<T>,
        index: usize,
    },
    Replace {
        current: T,
        previous: T,
        index: usize,
    },
    Move {
        item: T,
        current_index: usize,
        previous_index: usize,
    },
}

impl<T> Change<T> {
    pub fn reason(&self) -> ChangeReason {
        match self {
            Change::Add { .. } => ChangeReason::Add,
            Change::AddRange { .. } => ChangeReason::AddRange,
            Change::Remove { .. } => ChangeReason::Remove,
            Change::RemoveRange { .. } => ChangeReason::RemoveRange,
            Change::Replace { .. } => ChangeReason::Replace,
            Change::Move { .. } => ChangeReason::Move,
        }
    }

    /// Destination index: where items were added, removed or replaced, or
    /// where a moved item ended up.
    pub fn index(&self) -> usize {
        match self {
            Change::Add { index, .. }
            | Change::AddRange { index, .. }
            | Change::Remove { index, .. }
            | Change::RemoveRange { index, .. }
            | Change::Replace { index, .. } => *index,
            Change::Move { current_index, .. } => *current_index,
        }
    }

    /// Number of items the change adds or removes; 1 for replace and move.
    pub fn count(&self) -> usize {
        match self {
            Change::AddRange { items, .. } | Change::RemoveRange { items, .. } => items.len(),
            _ => 1,
        }
    }

    /// Applies the change to `list`, checking positions first.
    pub fn apply_to<L>(&self, list: &mut L) -> TrackingResult<()>
    where
        T: Clone,
        L: MutableList<T> + ?Sized,
    {
        let len = list.len();
        trace!(reason = ?self.reason(), index = self.index(), len, "apply change");
        match self {
            Change::Add { item, index } => {
                check_range(*index, 0, len)?;
                list.insert_at(*index, item.clone());
            }
            Change::AddRange { items, index } => {
                check_range(*index, 0, len)?;
                for (offset, item) in items.iter().enumerate() {
                    list.insert_at(index + offset, item.clone());
                }
            }
            Change::Remove { index, .. } => {
                check_range(*index, 1, len)?;
                list.remove_at(*index);
            }
            Change::RemoveRange { items, index } => {
                check_range(*index, items.len(), len)?;
                for _ in 0..items.len() {
                    list.remove_at(*index);
                }
            }
            Change::Replace { current, index, .. } => {
                check_range(*index, 1, len)?;
                list.replace_at(*index, current.clone());
            }
            Change::Move {
                current_index,
                previous_index,
                ..
            } => move_item::<T, L>(list, *previous_index, *current_index)?,
        }
        Ok(())
    }
}

fn unsupported(kind: OperationKind, reason: &str) -> TrackingError {
    TrackingError::UnsupportedOperation(format!("{kind}: {reason}"))
}

/// Converts one edit operation into the equivalent change event.
pub fn to_change<T: Clone>(op: &Operation<T>) -> TrackingResult<Change<T>> {
    let index = op.index();
    let first = || op.item().cloned().ok_or_else(|| unsupported(op.kind(), "no item"));
    let change = match op.kind() {
        OperationKind::Insert if op.len() > 1 => Change::AddRange {
            items: op.items().to_vec(),
            index,
        },
        OperationKind::Insert => Change::Add { item: first()?, index },
        OperationKind::Remove if op.len() > 1 => Change::RemoveRange {
            items: op.items().to_vec(),
            index,
        },
        OperationKind::Remove => Change::Remove { item: first()?, index },
        OperationKind::Replace => Change::Replace {
            current: first()?,
            previous: op
                .previous_item()
                .cloned()
                .ok_or_else(|| unsupported(op.kind(), "no previous item"))?,
            index,
        },
        OperationKind::Move => Change::Move {
            item: first()?,
            current_index: index,
            previous_index: op
                .from_index()
                .ok_or_else(|| unsupported(op.kind(), "no origin index"))?,
        },
    };
    Ok(change)
}

impl<T: Clone> TryFrom<&Operation<T>> for Change<T> {
    type Error = TrackingError;

    fn try_from(op: &Operation<T>) -> Result<Self, Self::Error> {
        to_change(op)
    }
}
