use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NUM_GAMES: usize = 10;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ArenaOptions {
    pub num_games: usize,
    /// Seeds the strategies of a match. Unset means every run differs.
    pub seed: Option<u64>,
    /// Alternate which strategy moves first. When unset the first strategy always moves first.
    pub swap_sides: bool,
}

impl Default for ArenaOptions {
    fn default() -> Self {
        Self {
            num_games: DEFAULT_NUM_GAMES,
            seed: None,
            swap_sides: false,
        }
    }
}

impl Config for ArenaOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            num_games: config
                .get("num_games")
                .and_then(|v| v.as_usize())
                .unwrap_or(DEFAULT_NUM_GAMES),
            seed: config.get("seed").and_then(|v| v.as_u64()),
            swap_sides: config
                .get("swap_sides")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }
}
