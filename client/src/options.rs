use anyhow::Result;
use arena::ArenaOptions;
use common::{Config, ConfigLoader};
use gomoku::{Gomoku, DEFAULT_HEIGHT, DEFAULT_K, DEFAULT_WIDTH};
use mcts::MCTSOptions;
use serde::{Deserialize, Serialize};
use strategies::HybridOptions;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoardOptions {
    pub width: usize,
    pub height: usize,
    pub k: usize,
}

impl BoardOptions {
    pub fn game_engine(&self) -> Result<Gomoku> {
        Gomoku::new(self.width, self.height, self.k)
    }
}

impl Config for BoardOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            width: config
                .get("board_width")
                .and_then(|v| v.as_usize())
                .unwrap_or(DEFAULT_WIDTH),
            height: config
                .get("board_height")
                .and_then(|v| v.as_usize())
                .unwrap_or(DEFAULT_HEIGHT),
            k: config
                .get("k")
                .and_then(|v| v.as_usize())
                .unwrap_or(DEFAULT_K),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatchOptions {
    pub board: BoardOptions,
    pub arena: ArenaOptions,
    pub mcts: MCTSOptions,
    pub strategies: HybridOptions,
}

impl Config for MatchOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            board: config.load()?,
            arena: config.load()?,
            mcts: config.load()?,
            strategies: config.load()?,
        })
    }
}
