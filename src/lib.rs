//! GT4500 Fire Control
//!
//! Torpedo fire control for a ship carrying two interchangeable torpedo
//! stores.
//!
//! # Overview
//!
//! A [`Ship`] holds a primary and a secondary [`TorpedoStore`] and decides,
//! per [`FiringMode`], which stores to launch from. Single shots alternate
//! between the stores; a full salvo fires both. Every failure, whether an
//! empty store, a jammed launcher or an unknown mode, is reported as `false`.
//!
//! # Modules
//!
//! - [`models`] - Ship, torpedo stores, firing modes and errors
//! - [`config`] - Loadout configuration from the environment
//! - [`services`] - Interactive fire-control console
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of firing results
//! - [`cli`] - Command-line flags
//!
//! # Example
//!
//! ```rust
//! use gt4500::{FiringMode, PhotonTorpedoStore, Ship};
//!
//! let mut primary = PhotonTorpedoStore::new(10, 0.0, 1);
//! let mut secondary = PhotonTorpedoStore::new(10, 0.0, 2);
//! let mut ship = Ship::new(&mut primary, &mut secondary);
//!
//! assert!(ship.fire_torpedo(FiringMode::Single));
//! assert!(ship.fire_torpedo(FiringMode::All));
//! drop(ship);
//! assert_eq!(primary.torpedo_count(), 8);
//! assert_eq!(secondary.torpedo_count(), 9);
//! ```

pub mod cli;
pub mod config;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use config::ShipConfig;
pub use models::firing_mode::FiringMode;
pub use models::ship::Ship;
pub use models::torpedo_store::{PhotonTorpedoStore, TorpedoStore};
