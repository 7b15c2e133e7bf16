//! Edit operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// One or more items inserted at a position.
    Insert,
    /// One or more items removed at a position.
    Remove,
    /// One item overwritten at a position.
    Replace,
    /// One item taken out of a position and reinserted at another.
    Move,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Insert => "insert",
            OperationKind::Remove => "remove",
            OperationKind::Replace => "replace",
            OperationKind::Move => "move",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single step of an edit script.
///
/// Which fields carry meaning depends on [`kind`](Operation::kind):
///
/// | Kind      | `items`            | `index`              | extra                     |
/// |-----------|--------------------|----------------------|---------------------------|
/// | `Insert`  | inserted, in order | first inserted slot  |                           |
/// | `Remove`  | removed, in order  | first removed slot   |                           |
/// | `Replace` | the new item       | overwritten slot     | `previous_item`           |
/// | `Move`    | the moved item     | destination slot     | `from_index` (origin)     |
///
/// Positions always refer to the list as it is when the operation is
/// applied, i.e. after every earlier operation of the same script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation<T> {
    pub(crate) kind: OperationKind,
    pub(crate) items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) previous_item: Option<T>,
    pub(crate) index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) from_index: Option<usize>,
}

impl<T> Operation<T> {
    pub fn insert(index: usize, items: Vec<T>) -> Self {
        Self {
            kind: OperationKind::Insert,
            items,
            previous_item: None,
            index,
            from_index: None,
        }
    }

    pub fn remove(index: usize, items: Vec<T>) -> Self {
        Self {
            kind: OperationKind::Remove,
            items,
            previous_item: None,
            index,
            from_index: None,
        }
    }

    pub fn replace(index: usize, previous_item: T, item: T) -> Self {
        Self {
            kind: OperationKind::Replace,
            items: vec![item],
            previous_item: Some(previous_item),
            index,
            from_index: None,
        }
    }

    /// A move of `item` from `from_index` to `index`.
    pub fn moved(from_index: usize, index: usize, item: T) -> Self {
        Self {
            kind: OperationKind::Move,
            items: vec![item],
            previous_item: None,
            index,
            from_index: Some(from_index),
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The first payload item: the new item of a `Replace`, the moved item
    /// of a `Move`.
    pub fn item(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn previous_item(&self) -> Option<&T> {
        self.previous_item.as_ref()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Origin of a `Move`; `None` for every other kind.
    pub fn from_index(&self) -> Option<usize> {
        self.from_index
    }

    /// Number of payload items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_single(&self) -> bool {
        self.items.len() == 1
    }

    pub(crate) fn make_move(&mut self, from_index: usize, index: usize) {
        self.kind = OperationKind::Move;
        self.from_index = Some(from_index);
        self.index = index;
    }
}

struct Joined<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Joined<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = Joined(self.items.get(..1).unwrap_or(&[]));
        match self.kind {
            OperationKind::Insert => {
                write!(f, "Insert '{}' at [{}]", Joined(&self.items), self.index)
            }
            OperationKind::Remove => {
                write!(f, "Remove '{}' from [{}]", Joined(&self.items), self.index)
            }
            OperationKind::Replace => {
                let previous = Joined(self.previous_item.as_slice());
                write!(f, "Replace '{previous}' by '{first}' at [{}]", self.index)
            }
            OperationKind::Move => match self.from_index {
                Some(from) => write!(f, "Move '{first}' from [{from}] to [{}]", self.index),
                None => write!(f, "Move '{first}' to [{}]", self.index),
            },
        }
    }
}
