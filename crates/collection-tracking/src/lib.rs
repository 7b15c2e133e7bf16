//! collection-tracking - edit scripts between ordered sequences.
//!
//! [`diff`] computes the operations (insert, remove, replace, move) that turn
//! a source sequence into a target sequence, and [`apply_operations`]
//! replays them onto a list. Replaying the script of `diff(source, target)`
//! onto a copy of `source` always yields `target`, duplicates included.
//!
//! ```
//! use collection_tracking::{apply_operations, diff};
//!
//! let source: Vec<char> = "ABCDEF".chars().collect();
//! let target: Vec<char> = "ABZDEF".chars().collect();
//!
//! let ops = diff(&source, &target);
//! assert_eq!(ops.len(), 1);
//! assert_eq!(ops[0].to_string(), "Replace 'C' by 'Z' at [2]");
//!
//! let mut list = source.clone();
//! apply_operations(&mut list, &ops).unwrap();
//! assert_eq!(list, target);
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`operation`] | [`Operation`], [`OperationKind`] |
//! | [`diff`] | diff entry points, coalescing |
//! | [`apply`] | [`apply_operation`], [`apply_operations`] |
//! | [`list`] | [`MutableList`], [`move_item`] |
//! | [`observer`] | step hook and [`ConsistencyCheck`] |
//! | [`options`] | [`DiffOptions`] |

pub mod apply;
pub mod diff;
pub mod error;
pub mod list;
pub mod observer;
pub mod operation;
pub mod options;

pub use apply::{apply_operation, apply_operations};
pub use diff::{diff, diff_by, diff_with_observer, diff_with_options};
pub use error::{TrackingError, TrackingResult};
pub use list::{check_range, move_item, MutableList};
pub use observer::{ConsistencyCheck, DiffObserver, DiffStep, Divergence, NoopObserver, StepKind};
pub use operation::{Operation, OperationKind};
pub use options::DiffOptions;
