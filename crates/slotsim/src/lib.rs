//! # slotsim
//!
//! Teaching simulator for storage-slot gas semantics: the first read of a
//! slot is a "cold" access, every later read is "warm". The simulator is a
//! plain state container (slot map + access cache) with no I/O; rendering
//! and transport live in the `slotview` and `slotsimd` crates.
//!
//! ## Model
//! - Slot map: integer key -> integer value, unset keys read as 0
//! - Access cache: keys in first-read order, loads append, stores do not
//! - `clear` resets both structures to the empty initial state

#![warn(missing_docs)]

mod error;
mod input;
mod sim;
mod stats;

pub use error::{Error, Result};
pub use input::{parse_key, parse_value};
pub use sim::{LoadOutcome, StorageSim};
pub use stats::AccessStats;
