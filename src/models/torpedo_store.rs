use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use super::errors::FireError;

/// A finite pool of torpedoes that the ship can draw from.
pub trait TorpedoStore {
    /// True when no torpedoes remain. Must not change the store.
    fn is_empty(&self) -> bool;

    /// Attempt to launch `count` torpedoes. Returns true on success.
    fn fire(&mut self, count: u32) -> bool;
}

impl<T: TorpedoStore + ?Sized> TorpedoStore for &mut T {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn fire(&mut self, count: u32) -> bool {
        (**self).fire(count)
    }
}

impl<T: TorpedoStore + ?Sized> TorpedoStore for Box<T> {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn fire(&mut self, count: u32) -> bool {
        (**self).fire(count)
    }
}

/// Photon torpedo magazine with a seeded chance of jamming on each launch.
#[derive(Debug, Clone)]
pub struct PhotonTorpedoStore {
    torpedoes: u32,
    failure_rate: f64,
    rng: StdRng,
}

impl PhotonTorpedoStore {
    /// Create a store holding `torpedoes`, jamming with probability
    /// `failure_rate` (clamped to 0.0..=1.0; NaN counts as 0.0).
    pub fn new(torpedoes: u32, failure_rate: f64, seed: u64) -> Self {
        Self::with_rng(torpedoes, failure_rate, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(torpedoes: u32, failure_rate: f64, rng: StdRng) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        PhotonTorpedoStore {
            torpedoes,
            failure_rate,
            rng,
        }
    }

    pub fn torpedo_count(&self) -> u32 {
        self.torpedoes
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    /// Launch `count` torpedoes, reporting why a launch did not happen.
    ///
    /// Torpedoes are only deducted on success. A jam leaves the count
    /// untouched.
    pub fn try_fire(&mut self, count: u32) -> Result<(), FireError> {
        if count == 0 || count > self.torpedoes {
            return Err(FireError::InvalidCount {
                requested: count,
                available: self.torpedoes,
            });
        }

        let roll: f64 = self.rng.gen();
        if roll < self.failure_rate {
            return Err(FireError::Jammed);
        }

        self.torpedoes -= count;
        Ok(())
    }
}

impl TorpedoStore for PhotonTorpedoStore {
    fn is_empty(&self) -> bool {
        self.torpedoes == 0
    }

    fn fire(&mut self, count: u32) -> bool {
        match self.try_fire(count) {
            Ok(()) => true,
            Err(err) => {
                warn!(target: "gt4500.store", requested = count, remaining = self.torpedoes, %err, "fire rejected");
                false
            }
        }
    }
}
