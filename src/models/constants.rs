pub const INITIAL_TORPEDOES: u32 = 10;
pub const DEFAULT_FAILURE_RATE: f64 = 0.0;
pub const DEFAULT_SEED: u64 = 0;

/// Torpedoes expended per store on each firing request.
pub const TORPEDOES_PER_SHOT: u32 = 1;

pub const FAILURE_RATE_ENV: &str = "IVT_RATE";
pub const SEED_ENV: &str = "GT4500_SEED";

/// Which of the ship's two stores an action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSlot {
    Primary,
    Secondary,
}

impl StoreSlot {
    pub fn name(&self) -> &'static str {
        match self {
            StoreSlot::Primary => "PRIMARY",
            StoreSlot::Secondary => "SECONDARY",
        }
    }

    /// The slot on the other side of the ship.
    pub fn other(&self) -> StoreSlot {
        match self {
            StoreSlot::Primary => StoreSlot::Secondary,
            StoreSlot::Secondary => StoreSlot::Primary,
        }
    }

    pub const ALL: [StoreSlot; 2] = [StoreSlot::Primary, StoreSlot::Secondary];
}
