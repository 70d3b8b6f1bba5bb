use crate::fleet::FleetComposition;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// Default fleet as `(length, count)` pairs: ten ships in total.
pub const DEFAULT_FLEET: [(usize, usize); 4] = [(4, 1), (3, 2), (2, 3), (1, 4)];

/// Random origins tried for a single ship before the layout is restarted.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Full-layout restarts before random generation gives up.
pub const MAX_GENERATION_RESTARTS: usize = 32;

/// Board dimensions and fleet for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub fleet: FleetComposition,
}

impl GameConfig {
    pub fn new(width: usize, height: usize, fleet: FleetComposition) -> Self {
        Self {
            width,
            height,
            fleet,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fleet: FleetComposition::default(),
        }
    }
}
