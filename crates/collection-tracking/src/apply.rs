//! Replays edit scripts onto a list.

use tracing::trace;

use crate::error::{TrackingError, TrackingResult};
use crate::list::{check_index, check_range, move_item, MutableList};
use crate::operation::{Operation, OperationKind};

/// Applies one operation to `list` in place.
///
/// Positions are validated before anything is mutated, so a failing
/// operation leaves `list` as it was.
pub fn apply_operation<T, L>(list: &mut L, op: &Operation<T>) -> TrackingResult<()>
where
    T: Clone,
    L: MutableList<T> + ?Sized,
{
    trace!(kind = %op.kind, index = op.index, len = list.len(), "apply operation");
    let len = list.len();
    match op.kind {
        OperationKind::Insert => {
            check_range(op.index, 0, len)?;
            for (offset, item) in op.items.iter().enumerate() {
                list.insert_at(op.index + offset, item.clone());
            }
        }
        OperationKind::Remove => {
            check_range(op.index, op.items.len(), len)?;
            for _ in 0..op.items.len() {
                list.remove_at(op.index);
            }
        }
        OperationKind::Replace => {
            let item = op.item().ok_or_else(|| missing(op.kind, "item"))?;
            check_index(op.index, len)?;
            list.replace_at(op.index, item.clone());
        }
        OperationKind::Move => {
            let from = op.from_index.ok_or_else(|| missing(op.kind, "from_index"))?;
            move_item::<T, L>(list, from, op.index)?;
        }
    }
    Ok(())
}

/// Applies `ops` in order.
///
/// Stops at the first failing operation; earlier operations stay applied.
pub fn apply_operations<'a, T, L, I>(list: &mut L, ops: I) -> TrackingResult<()>
where
    T: Clone + 'a,
    L: MutableList<T> + ?Sized,
    I: IntoIterator<Item = &'a Operation<T>>,
{
    for op in ops {
        apply_operation(list, op)?;
    }
    Ok(())
}

fn missing(kind: OperationKind, field: &str) -> TrackingError {
    TrackingError::UnsupportedOperation(format!("{kind} without {field}"))
}
