/// Selects which stores a firing request draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiringMode {
    /// One torpedo from a single store, alternating between stores.
    Single,
    /// One torpedo from each store.
    All,
    /// Unrecognized mode. Never fires.
    Default,
}

impl FiringMode {
    /// Parse a mode name. Anything that is not `single` or `all` maps to
    /// [`FiringMode::Default`].
    pub fn parse(input: &str) -> FiringMode {
        match input.trim().to_ascii_lowercase().as_str() {
            "single" => FiringMode::Single,
            "all" => FiringMode::All,
            _ => FiringMode::Default,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FiringMode::Single => "SINGLE",
            FiringMode::All => "ALL",
            FiringMode::Default => "DEFAULT",
        }
    }
}
