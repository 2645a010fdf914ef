//! The [`CargoBox`] container and the [`heaviest_cargo_box`] selector.
//!
//! A box holds zero or more shared [`Item`]s in insertion order. Items can be
//! added over the box's lifetime, the box can be emptied or filtered in
//! place, and filtered copies can be taken without touching the original.
//! Absent items (`None`) are skipped at insertion and never stored.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::CapacityConfig;
use crate::error::{CargoError, Result};
use crate::item::Item;
use crate::stats::BoxSummary;

/// A mutable, ordered collection of shared items.
///
/// The box keeps its own sequence; the same `Arc<Item>` may also be held by
/// other boxes or by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoBox {
    /// Invariant: contains no absent entries.
    items: Vec<Arc<Item>>,
}

impl CargoBox {
    /// Create an empty box.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a box holding the present items of `items`, in order.
    ///
    /// The batch is consumed by iteration only; the box builds its own
    /// sequence and shares the items themselves.
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Arc<Item>>>,
    {
        let mut cargo = Self::new();
        cargo.add_all(items);
        cargo
    }

    // -----------------------------------------------------------------------
    // Modifiers
    // -----------------------------------------------------------------------

    /// Append `item` if present. Returns `true` if it was added, `false` if
    /// `item` was `None` (the box is left unchanged).
    pub fn add(&mut self, item: Option<Arc<Item>>) -> bool {
        match item {
            Some(item) => {
                self.items.push(item);
                true
            }
            None => {
                trace!("Skipping absent item");
                false
            }
        }
    }

    /// Add every present item of `items`, in order. Returns `true` if at
    /// least one item was added.
    pub fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Option<Arc<Item>>>,
    {
        let mut added_any = false;
        for item in items {
            added_any |= self.add(item.into());
        }
        added_any
    }

    /// Like [`add`](Self::add), but refuses the item when it would break one
    /// of the `limits`. A refused item leaves the box unchanged.
    ///
    /// # Errors
    /// Returns `CargoError::CapacityExceeded` when the box is already full,
    /// or `CargoError::WeightLimitExceeded` when the new total weight would
    /// exceed the configured maximum.
    pub fn try_add(&mut self, item: Option<Arc<Item>>, limits: &CapacityConfig) -> Result<bool> {
        let Some(item) = item else {
            return Ok(false);
        };

        if let Some(limit) = limits.max_items {
            let current = self.items.len();
            if current >= limit {
                warn!(limit, current, item = %item, "Cargo box is full");
                return Err(CargoError::CapacityExceeded { limit, current });
            }
        }

        if let Some(limit) = limits.max_total_weight_grammes {
            let attempted = self.total_weight_in_grammes() + i64::from(item.weight_in_grammes());
            if attempted > limit {
                warn!(limit, attempted, item = %item, "Cargo box weight limit reached");
                return Err(CargoError::WeightLimitExceeded { limit, attempted });
            }
        }

        Ok(self.add(Some(item)))
    }

    /// Remove every item from this box.
    pub fn empty(&mut self) {
        let dropped = self.items.len();
        self.items.clear();
        debug!(dropped, "Emptied cargo box");
    }

    /// Keep exactly those items whose weight is at most
    /// `max_item_weight_in_grammes`, preserving their relative order.
    pub fn keep_only_items_with(&mut self, max_item_weight_in_grammes: i32) {
        let before = self.items.len();
        self.items
            .retain(|item| item.weight_in_grammes() <= max_item_weight_in_grammes);
        debug!(
            max_weight = max_item_weight_in_grammes,
            kept = self.items.len(),
            removed = before - self.items.len(),
            "Filtered cargo box in place"
        );
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Number of items currently held.
    #[must_use]
    pub fn number_of_items(&self) -> usize {
        self.items.len()
    }

    /// Whether the box holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the weights of all held items; `0` for an empty box.
    #[must_use]
    pub fn total_weight_in_grammes(&self) -> i64 {
        self.items
            .iter()
            .map(|item| i64::from(item.weight_in_grammes()))
            .sum()
    }

    /// Average item weight, or exactly `-1.0` when the box is empty.
    ///
    /// For a box holding `("clock", 400)` and `("textbook", 395)` the
    /// result is `397.5`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_weight_in_grammes(&self) -> f64 {
        if self.items.is_empty() {
            return -1.0;
        }
        self.total_weight_in_grammes() as f64 / self.items.len() as f64
    }

    /// The greatest item by natural ordering, or `None` if the box is empty.
    ///
    /// When several items compare equal at the top, the earliest inserted
    /// one is returned.
    #[must_use]
    pub fn greatest_item(&self) -> Option<&Arc<Item>> {
        self.items
            .iter()
            .reduce(|greatest, item| if **item > **greatest { item } else { greatest })
    }

    /// A new box sharing exactly those items whose weight is at most
    /// `max_item_weight_in_grammes`. Does not modify `self`.
    #[must_use]
    pub fn make_new_cargo_box_with(&self, max_item_weight_in_grammes: i32) -> Self {
        self.items
            .iter()
            .filter(|item| item.weight_in_grammes() <= max_item_weight_in_grammes)
            .cloned()
            .collect()
    }

    /// One-pass snapshot of the aggregate queries.
    #[must_use]
    pub fn summary(&self) -> BoxSummary {
        BoxSummary::of(self)
    }

    /// The held items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    /// Iterate over the held items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Item>> {
        self.items.iter()
    }

    // -----------------------------------------------------------------------
    // JSON interchange
    // -----------------------------------------------------------------------

    /// Serialize the box to a JSON string.
    ///
    /// # Errors
    /// Returns `CargoError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CargoError::Serialization(e.to_string()))
    }

    /// Deserialize a box from a JSON string produced by [`to_json`](Self::to_json).
    ///
    /// Items come back as fresh allocations; sharing between boxes is not
    /// preserved.
    ///
    /// # Errors
    /// Returns `CargoError::Serialization` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CargoError::Serialization(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Heaviest box
// ---------------------------------------------------------------------------

/// The box with the highest total weight among the present entries of
/// `boxes`, or `None` if there are none.
///
/// An empty box weighs `0` and is still a valid answer. On a tie the earliest
/// present box wins.
pub fn heaviest_cargo_box<'a, I>(boxes: I) -> Option<&'a CargoBox>
where
    I: IntoIterator<Item = Option<&'a CargoBox>>,
{
    boxes
        .into_iter()
        .flatten()
        .fold(None, |heaviest: Option<(&'a CargoBox, i64)>, candidate| {
            let weight = candidate.total_weight_in_grammes();
            match heaviest {
                Some((_, max)) if weight <= max => heaviest,
                _ => Some((candidate, weight)),
            }
        })
        .map(|(cargo, _)| cargo)
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl fmt::Display for CargoBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl FromIterator<Arc<Item>> for CargoBox {
    fn from_iter<T: IntoIterator<Item = Arc<Item>>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Arc<Item>> for CargoBox {
    fn extend<T: IntoIterator<Item = Arc<Item>>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CargoBox {
    type Item = &'a Arc<Item>;
    type IntoIter = std::slice::Iter<'a, Arc<Item>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
