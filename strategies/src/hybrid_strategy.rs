use std::fmt::Debug;
use std::hash::Hash;

use anyhow::{bail, Result};
use engine::{CanonicalBoard, GameEngine, ValidActions};
use log::info;
use mcts::MCTSOptions;

use crate::{AlphaBetaStrategy, Evaluator, HybridOptions, MCTSStrategy, Strategy};

/// Uses alpha-beta search when few moves are available and MCTS otherwise.
pub struct HybridStrategy<'a, E, V> {
    game_engine: &'a E,
    threshold: usize,
    alpha_beta: AlphaBetaStrategy<'a, E, V>,
    mcts: MCTSStrategy<'a, E>,
}

impl<'a, E, V> HybridStrategy<'a, E, V> {
    pub fn new(
        game_engine: &'a E,
        evaluator: V,
        mcts_options: MCTSOptions,
        options: &HybridOptions,
    ) -> Self {
        Self {
            game_engine,
            threshold: options.threshold,
            alpha_beta: AlphaBetaStrategy::new(game_engine, evaluator, options.alpha_beta_depth),
            mcts: MCTSStrategy::new(game_engine, mcts_options, options.rollout_budget()),
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl<'a, E, V, S, A> Strategy for HybridStrategy<'a, E, V>
where
    S: Clone + Debug,
    A: Clone + Debug + Hash + Ord,
    E: GameEngine<State = S, Action = A>
        + ValidActions<State = S, Action = A>
        + CanonicalBoard<State = S>,
    V: Evaluator<S>,
{
    type State = S;
    type Action = A;

    fn choose_action(&mut self, game_state: &S) -> Result<A> {
        if self.game_engine.is_terminal_state(game_state) {
            bail!("Cannot choose an action from a terminal state");
        }

        let available_moves = self.game_engine.valid_actions(game_state).count();

        if available_moves <= self.threshold {
            info!("Using Minimax. Available moves: {}", available_moves);
            self.alpha_beta.choose_action(game_state)
        } else {
            info!(
                "Using Monte Carlo Tree Search. Available moves: {}",
                available_moves
            );
            self.mcts.choose_action(game_state)
        }
    }

    fn name(&self) -> &str {
        "hybrid"
    }
}
