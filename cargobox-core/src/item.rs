//! A single weighed object that can be stored in a [`CargoBox`](crate::CargoBox).

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named object with a weight in grammes.
///
/// Items are immutable once built; boxes share them through `Arc<Item>` and
/// never modify them. The natural ordering is by weight, with the name as a
/// secondary key so that `Ord` agrees with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    weight_in_grammes: i32,
}

impl Item {
    /// Create a new item. Weights are not validated; negative values are
    /// kept as given.
    #[must_use]
    pub fn new(name: impl Into<String>, weight_in_grammes: i32) -> Self {
        Self {
            name: name.into(),
            weight_in_grammes,
        }
    }

    /// The item's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's weight in grammes.
    #[must_use]
    pub fn weight_in_grammes(&self) -> i32 {
        self.weight_in_grammes
    }

    /// Compare by weight only, ignoring the name.
    #[must_use]
    pub fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.weight_in_grammes.cmp(&other.weight_in_grammes)
    }
}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_by_weight(other)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}g)", self.name, self.weight_in_grammes)
    }
}
