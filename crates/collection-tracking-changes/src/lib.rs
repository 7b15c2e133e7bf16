//! Change-notification events for collection-tracking edit scripts.
//!
//! Observable-collection bindings usually speak in add/remove/replace/move
//! events rather than edit operations. [`to_change`] and [`to_change_set`]
//! translate a script produced by [`collection_tracking::diff`] into that
//! shape, and [`ChangeSet::replay`] applies the events to any
//! [`MutableList`](collection_tracking::MutableList).
//!
//! ```
//! use collection_tracking::diff;
//! use collection_tracking_changes::{to_change_set, Change};
//!
//! let source: Vec<char> = "BCDAEF".chars().collect();
//! let target: Vec<char> = "ABCDEF".chars().collect();
//!
//! let set = to_change_set(&diff(&source, &target)).unwrap();
//! assert_eq!(
//!     set.iter().next(),
//!     Some(&Change::Move { item: 'A', current_index: 0, previous_index: 3 })
//! );
//!
//! let mut list = source.clone();
//! set.replay(&mut list).unwrap();
//! assert_eq!(list, target);
//! ```

pub mod change;
pub mod change_set;

pub use change::{to_change, Change, ChangeReason};
pub use change_set::{to_change_set, ChangeSet};
