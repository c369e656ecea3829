mod alpha_beta_strategy;
mod evaluator;
mod hybrid_strategy;
mod mcts_strategy;
mod options;
mod random_strategy;
mod strategy;

pub use alpha_beta_strategy::*;
pub use evaluator::*;
pub use hybrid_strategy::*;
pub use mcts_strategy::*;
pub use options::*;
pub use random_strategy::*;
pub use strategy::*;
