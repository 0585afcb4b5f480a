//! Domain models
//!
//! Torpedo stores, the ship that fires from them, and the supporting
//! enums and error types.

pub mod constants;
pub mod errors;
pub mod firing_mode;
pub mod ship;
pub mod torpedo_store;

#[cfg(test)]
pub mod test_utils;
