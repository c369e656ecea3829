use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPLORATION_WEIGHT: f32 = 1.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MCTSOptions {
    /// Weight `c` of the exploration term in `Q/N + c * sqrt(ln(N_parent) / N)`.
    pub exploration_weight: f32,
    /// Seed for the unexplored child pick, simulation moves and the fallback move.
    pub seed: Option<u64>,
}

impl MCTSOptions {
    pub fn new(exploration_weight: f32, seed: Option<u64>) -> Self {
        Self {
            exploration_weight,
            seed,
        }
    }
}

impl Default for MCTSOptions {
    fn default() -> Self {
        Self::new(DEFAULT_EXPLORATION_WEIGHT, None)
    }
}

impl Config for MCTSOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            exploration_weight: config
                .get("exploration_weight")
                .and_then(|v| v.as_f32())
                .unwrap_or(DEFAULT_EXPLORATION_WEIGHT),
            seed: config.get("seed").and_then(|v| v.as_u64()),
        })
    }
}
