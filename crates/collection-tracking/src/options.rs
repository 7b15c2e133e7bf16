use serde::{Deserialize, Serialize};

/// Selects which operation kinds a diff may produce.
///
/// Both kinds are permitted by default. Disabling a kind never makes a diff
/// fail: a move decomposes into a `Remove` plus an `Insert`, and a replace
/// stays as an adjacent `Remove` and `Insert`.
///
/// ```
/// use collection_tracking::DiffOptions;
///
/// let options = DiffOptions::default().without_move();
/// assert!(!options.allow_move);
/// assert!(options.allow_replace);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    pub allow_move: bool,
    pub allow_replace: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            allow_move: true,
            allow_replace: true,
        }
    }
}

impl DiffOptions {
    /// Only inserts and removes.
    pub const INSERT_REMOVE_ONLY: DiffOptions = DiffOptions {
        allow_move: false,
        allow_replace: false,
    };

    pub fn without_move(self) -> Self {
        Self {
            allow_move: false,
            ..self
        }
    }

    pub fn without_replace(self) -> Self {
        Self {
            allow_replace: false,
            ..self
        }
    }

    /// All four combinations of the two switches, default first.
    pub fn all() -> [DiffOptions; 4] {
        let default = DiffOptions::default();
        [
            default,
            default.without_replace(),
            default.without_move(),
            DiffOptions::INSERT_REMOVE_ONLY,
        ]
    }
}
