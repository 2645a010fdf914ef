//! # CargoBox Core Library
//!
//! In-memory containers of weighed objects.
//!
//! - [`Item`] — a named object with a weight in grammes, ordered by weight.
//! - [`CargoBox`] — a growable, shrinkable collection of shared [`Item`]s
//!   with aggregate queries (count, total, average, greatest) and weight
//!   filters (in place or as a new box).
//! - [`heaviest_cargo_box`] — pick the heaviest among several boxes.
//!
//! Absent inputs (`None`) are skipped rather than stored, and queries on an
//! empty box answer with sentinels instead of failing:
//!
//! ```
//! use std::sync::Arc;
//! use cargobox_core::{CargoBox, Item};
//!
//! let pen = Arc::new(Item::new("Pen", 15));
//! let letter = Arc::new(Item::new("Letter", 20));
//! let cargo = CargoBox::from_items([Some(pen.clone()), Some(letter), None, Some(pen)]);
//!
//! assert_eq!(cargo.number_of_items(), 3);
//! assert_eq!(cargo.to_string(), "[(Pen, 15g), (Letter, 20g), (Pen, 15g)]");
//! assert_eq!(CargoBox::new().average_weight_in_grammes(), -1.0);
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cargo_box;
pub mod config;
pub mod error;
pub mod item;
pub mod stats;

pub use cargo_box::{CargoBox, heaviest_cargo_box};
pub use config::{CapacityConfig, CargoConfig};
pub use error::CargoError;
pub use item::Item;
pub use stats::BoxSummary;
