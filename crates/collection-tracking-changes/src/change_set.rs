//! Ordered batches of change events.

use collection_tracking::{MutableList, Operation, TrackingResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::change::{to_change, Change, ChangeReason};

/// The change events produced by one diff, in replay order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet<T> {
    changes: Vec<Change<T>>,
}

impl<T> Default for ChangeSet<T> {
    fn default() -> Self {
        Self { changes: Vec::new() }
    }
}

impl<T> ChangeSet<T> {
    pub fn new(changes: Vec<Change<T>>) -> Self {
        Self { changes }
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change<T>> {
        self.changes.iter()
    }

    pub fn push(&mut self, change: Change<T>) {
        self.changes.push(change);
    }

    /// Items added, counting every item of a range.
    pub fn adds(&self) -> usize {
        self.count_items(&[ChangeReason::Add, ChangeReason::AddRange])
    }

    /// Items removed, counting every item of a range.
    pub fn removes(&self) -> usize {
        self.count_items(&[ChangeReason::Remove, ChangeReason::RemoveRange])
    }

    pub fn replaced(&self) -> usize {
        self.count_items(&[ChangeReason::Replace])
    }

    pub fn moves(&self) -> usize {
        self.count_items(&[ChangeReason::Move])
    }

    fn count_items(&self, reasons: &[ChangeReason]) -> usize {
        self.changes
            .iter()
            .filter(|change| reasons.contains(&change.reason()))
            .map(Change::count)
            .sum()
    }

    /// Applies every change to `list` in order.
    ///
    /// Stops at the first change whose positions do not fit the list; the
    /// changes before it stay applied.
    pub fn replay<L>(&self, list: &mut L) -> TrackingResult<()>
    where
        T: Clone,
        L: MutableList<T> + ?Sized,
    {
        for change in &self.changes {
            change.apply_to(list)?;
        }
        Ok(())
    }
}

impl<T> IntoIterator for ChangeSet<T> {
    type Item = Change<T>;
    type IntoIter = std::vec::IntoIter<Change<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ChangeSet<T> {
    type Item = &'a Change<T>;
    type IntoIter = std::slice::Iter<'a, Change<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

impl<T> FromIterator<Change<T>> for ChangeSet<T> {
    fn from_iter<I: IntoIterator<Item = Change<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Converts a whole edit script, failing on the first malformed operation.
pub fn to_change_set<'a, T, I>(ops: I) -> TrackingResult<ChangeSet<T>>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a Operation<T>>,
{
    let set = ops.into_iter().map(to_change).collect::<TrackingResult<ChangeSet<T>>>()?;
    debug!(
        changes = set.len(),
        adds = set.adds(),
        removes = set.removes(),
        replaced = set.replaced(),
        moves = set.moves(),
        "change set built"
    );
    Ok(set)
}
