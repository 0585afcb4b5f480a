use tracing::{debug, info};

use super::constants::{StoreSlot, TORPEDOES_PER_SHOT};
use super::firing_mode::FiringMode;
use super::torpedo_store::{PhotonTorpedoStore, TorpedoStore};
use crate::config::ShipConfig;

/// The GT4500 and its two torpedo stores.
///
/// The stores are fixed at construction. Pass `&mut store` to keep
/// ownership with the caller.
pub struct Ship<P, S> {
    primary: P,
    secondary: S,
    /// Store fired last in single mode. `None` until the first single shot.
    last_fired: Option<StoreSlot>,
}

impl<P: TorpedoStore, S: TorpedoStore> Ship<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Ship {
            primary,
            secondary,
            last_fired: None,
        }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    /// Fires torpedoes according to `mode`.
    ///
    /// Returns true only if every launch the mode calls for succeeded.
    /// Empty stores, jams and unrecognized modes all report false.
    pub fn fire_torpedo(&mut self, mode: FiringMode) -> bool {
        let success = match mode {
            FiringMode::Single => self.fire_single(),
            FiringMode::All => self.fire_all(),
            FiringMode::Default => {
                debug!(target: "gt4500.ship", "unrecognized firing mode, holding fire");
                false
            }
        };
        info!(target: "gt4500.ship", mode = mode.label(), success, "torpedo request resolved");
        success
    }

    fn is_empty(&self, slot: StoreSlot) -> bool {
        match slot {
            StoreSlot::Primary => self.primary.is_empty(),
            StoreSlot::Secondary => self.secondary.is_empty(),
        }
    }

    fn fire_from(&mut self, slot: StoreSlot) -> bool {
        match slot {
            StoreSlot::Primary => self.primary.fire(TORPEDOES_PER_SHOT),
            StoreSlot::Secondary => self.secondary.fire(TORPEDOES_PER_SHOT),
        }
    }

    /// One shot, preferring the store that did not fire last. Falls back to
    /// the other store only when the preferred one is empty; a failed launch
    /// ends the request.
    fn fire_single(&mut self) -> bool {
        let preferred = match self.last_fired {
            Some(StoreSlot::Primary) => StoreSlot::Secondary,
            Some(StoreSlot::Secondary) | None => StoreSlot::Primary,
        };

        let chosen = if !self.is_empty(preferred) {
            preferred
        } else if !self.is_empty(preferred.other()) {
            debug!(target: "gt4500.ship", empty = preferred.name(), "preferred store empty, falling back");
            preferred.other()
        } else {
            debug!(target: "gt4500.ship", "both stores empty");
            return false;
        };

        let success = self.fire_from(chosen);
        self.last_fired = Some(chosen);
        debug!(target: "gt4500.ship", store = chosen.name(), success, "single shot");
        success
    }

    /// One shot from each store, primary first. Stops at the first empty
    /// store or failed launch.
    fn fire_all(&mut self) -> bool {
        if self.primary.is_empty() {
            debug!(target: "gt4500.ship", "primary store empty, salvo aborted");
            return false;
        }
        let primary_fired = self.primary.fire(TORPEDOES_PER_SHOT);
        if !primary_fired {
            debug!(target: "gt4500.ship", "primary launch failed, salvo aborted");
            return false;
        }

        if self.secondary.is_empty() {
            debug!(target: "gt4500.ship", "secondary store empty, salvo incomplete");
            return false;
        }
        let secondary_fired = self.secondary.fire(TORPEDOES_PER_SHOT);

        primary_fired && secondary_fired
    }
}

impl Ship<PhotonTorpedoStore, PhotonTorpedoStore> {
    /// Build a ship with two photon torpedo stores loaded per `config`.
    /// The secondary store's RNG is seeded one past the primary's.
    pub fn from_config(config: &ShipConfig) -> Self {
        Ship::new(
            PhotonTorpedoStore::new(config.primary_torpedoes, config.failure_rate, config.seed),
            PhotonTorpedoStore::new(
                config.secondary_torpedoes,
                config.failure_rate,
                config.seed.wrapping_add(1),
            ),
        )
    }

    pub fn torpedo_count(&self, slot: StoreSlot) -> u32 {
        match slot {
            StoreSlot::Primary => self.primary.torpedo_count(),
            StoreSlot::Secondary => self.secondary.torpedo_count(),
        }
    }
}

impl Default for Ship<PhotonTorpedoStore, PhotonTorpedoStore> {
    fn default() -> Self {
        Ship::from_config(&ShipConfig::default())
    }
}
