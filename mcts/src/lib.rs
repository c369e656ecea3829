mod borrowed_or_owned;
#[cfg(test)]
mod counting_game;
mod error;
mod mcts;
mod node_metrics;
mod options;
mod state_key;
mod tree;

pub use error::*;
pub use mcts::*;
pub use node_metrics::*;
pub use options::*;
pub use state_key::*;
pub use tree::*;
