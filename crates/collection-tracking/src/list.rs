//! Positional mutation over indexable sequences.

use std::collections::VecDeque;

use crate::error::{TrackingError, TrackingResult};

/// An ordered sequence that supports positional insert, remove and
/// overwrite.
///
/// Implementations may panic on out-of-range positions; callers in this
/// crate check bounds first.
pub trait MutableList<T> {
    fn len(&self) -> usize;

    fn insert_at(&mut self, index: usize, item: T);

    fn remove_at(&mut self, index: usize) -> T;

    /// Overwrites the item at `index`, returning the previous one.
    fn replace_at(&mut self, index: usize, item: T) -> T;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> MutableList<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn insert_at(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }

    fn remove_at(&mut self, index: usize) -> T {
        self.remove(index)
    }

    fn replace_at(&mut self, index: usize, item: T) -> T {
        std::mem::replace(&mut self[index], item)
    }
}

impl<T> MutableList<T> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn insert_at(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }

    fn remove_at(&mut self, index: usize) -> T {
        match self.remove(index) {
            Some(item) => item,
            None => panic!("remove_at: index {index} out of bounds"),
        }
    }

    fn replace_at(&mut self, index: usize, item: T) -> T {
        std::mem::replace(&mut self[index], item)
    }
}

/// Fails with `IndexOutOfRange` unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> TrackingResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(TrackingError::IndexOutOfRange { index, len })
    }
}

/// Fails with `IndexOutOfRange` unless the `count` positions starting at
/// `index` all lie within `0..=len` for an insertion point (`count == 0`)
/// or `0..len` otherwise.
///
/// The reported index is the last position the range would touch.
pub fn check_range(index: usize, count: usize, len: usize) -> TrackingResult<()> {
    match index.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(TrackingError::IndexOutOfRange {
            index: index.saturating_add(count.saturating_sub(1)),
            len,
        }),
    }
}

/// Takes the item at `from` out of `list` and reinserts it at `to`.
///
/// `to` is a position in the list after the removal, so both positions must
/// be below the current length.
///
/// ```
/// use collection_tracking::move_item;
///
/// let mut list: Vec<char> = "ABCDEF".chars().collect();
/// move_item(&mut list, 1, 3).unwrap();
/// assert_eq!(list.iter().collect::<String>(), "ACDBEF");
/// ```
pub fn move_item<T, L>(list: &mut L, from: usize, to: usize) -> TrackingResult<()>
where
    L: MutableList<T> + ?Sized,
{
    let len = list.len();
    check_index(from, len)?;
    check_index(to, len)?;
    if from != to {
        let item = list.remove_at(from);
        list.insert_at(to, item);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn move_forward_and_backward() {
        let mut list = chars("ABCDEF");
        move_item(&mut list, 1, 3).unwrap();
        assert_eq!(list, chars("ACDBEF"));

        let mut list = chars("ABCDEF");
        move_item(&mut list, 0, 3).unwrap();
        assert_eq!(list, chars("BCDAEF"));

        let mut list = chars("AB");
        move_item(&mut list, 0, 1).unwrap();
        assert_eq!(list, chars("BA"));

        let mut list = chars("ABCDEF");
        move_item(&mut list, 4, 0).unwrap();
        assert_eq!(list, chars("EABCDF"));
    }

    #[test]
    fn move_on_deque() {
        let mut list: VecDeque<char> = "ABCDEF".chars().collect();
        move_item(&mut list, 1, 3).unwrap();
        assert_eq!(list.iter().collect::<String>(), "ACDBEF");
    }

    #[test]
    fn move_out_of_range_leaves_list_untouched() {
        let mut list = chars("AB");
        assert_eq!(
            move_item(&mut list, 2, 0),
            Err(TrackingError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            move_item(&mut list, 0, 2),
            Err(TrackingError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(list, chars("AB"));
    }

    #[test]
    fn range_check_reports_last_touched_index() {
        assert_eq!(check_range(1, 1, 2), Ok(()));
        assert_eq!(check_range(2, 0, 2), Ok(()));
        assert_eq!(
            check_range(1, 2, 2),
            Err(TrackingError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            check_range(3, 0, 2),
            Err(TrackingError::IndexOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(
            check_range(usize::MAX, 2, 2),
            Err(TrackingError::IndexOutOfRange {
                index: usize::MAX,
                len: 2
            })
        );
    }

    #[test]
    fn replace_at_returns_previous() {
        let mut list = chars("AB");
        assert_eq!(list.replace_at(1, 'Z'), 'B');
        assert_eq!(list, chars("AZ"));
    }
}
