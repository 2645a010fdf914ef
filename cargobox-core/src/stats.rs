//! Aggregate snapshot of a [`CargoBox`].

use std::sync::Arc;

use serde::Serialize;

use crate::cargo_box::CargoBox;
use crate::item::Item;

/// The aggregate queries of a box, computed in a single pass.
///
/// Values agree with the individual accessors on [`CargoBox`], including the
/// empty-box sentinels (`-1.0` average, no greatest item).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    /// Number of items held.
    pub item_count: usize,
    /// Sum of item weights.
    pub total_weight_grammes: i64,
    /// Mean item weight, or `-1.0` for an empty box.
    pub average_weight_grammes: f64,
    /// Greatest item by natural ordering (earliest inserted on a tie).
    pub greatest: Option<Arc<Item>>,
}

impl BoxSummary {
    /// Summarise `cargo`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(cargo: &CargoBox) -> Self {
        let mut total = 0_i64;
        let mut greatest: Option<&Arc<Item>> = None;
        for item in cargo {
            total += i64::from(item.weight_in_grammes());
            if greatest.is_none_or(|g| **item > **g) {
                greatest = Some(item);
            }
        }

        let count = cargo.number_of_items();
        let average = if count == 0 { -1.0 } else { total as f64 / count as f64 };

        Self {
            item_count: count,
            total_weight_grammes: total,
            average_weight_grammes: average,
            greatest: greatest.cloned(),
        }
    }
}
