use std::time::Duration;

use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

use crate::RolloutBudget;

pub const DEFAULT_HYBRID_THRESHOLD: usize = 165;
pub const DEFAULT_ALPHA_BETA_DEPTH: usize = 2;
pub const DEFAULT_TIME_LIMIT: f32 = 0.1;
pub const ROLLOUTS_PER_TIME_LIMIT: f32 = 100.0;

/// Settings for the MCTS and alpha-beta strategies and for the hybrid that switches between
/// them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HybridOptions {
    /// Alpha-beta is used when the number of legal moves is at most this.
    pub threshold: usize,
    pub alpha_beta_depth: usize,
    pub rollouts: usize,
    /// When set, MCTS searches for this long instead of a fixed number of rollouts.
    pub search_time_ms: Option<u64>,
}

impl HybridOptions {
    pub fn rollout_budget(&self) -> RolloutBudget {
        match self.search_time_ms {
            Some(ms) => RolloutBudget::Time(Duration::from_millis(ms)),
            None => RolloutBudget::Rollouts(self.rollouts),
        }
    }
}

/// Rollouts granted per move for a `time_limit` budget. The product is rounded to the nearest
/// whole rollout rather than truncated, so a limit of `0.126` gives 13 rollouts and not 12.
pub fn rollouts_for_time_limit(time_limit: f32) -> usize {
    (time_limit * ROLLOUTS_PER_TIME_LIMIT).round() as usize
}

impl Default for HybridOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_HYBRID_THRESHOLD,
            alpha_beta_depth: DEFAULT_ALPHA_BETA_DEPTH,
            rollouts: rollouts_for_time_limit(DEFAULT_TIME_LIMIT),
            search_time_ms: None,
        }
    }
}

impl Config for HybridOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let time_limit = config
            .get("time_limit")
            .and_then(|v| v.as_f32())
            .unwrap_or(DEFAULT_TIME_LIMIT);

        Ok(Self {
            threshold: config
                .get("hybrid_threshold")
                .and_then(|v| v.as_usize())
                .unwrap_or(DEFAULT_HYBRID_THRESHOLD),
            alpha_beta_depth: config
                .get("alpha_beta_depth")
                .and_then(|v| v.as_usize())
                .unwrap_or(DEFAULT_ALPHA_BETA_DEPTH),
            rollouts: config
                .get("rollouts")
                .and_then(|v| v.as_usize())
                .unwrap_or_else(|| rollouts_for_time_limit(time_limit)),
            search_time_ms: config.get("search_time_ms").and_then(|v| v.as_u64()),
        })
    }
}
