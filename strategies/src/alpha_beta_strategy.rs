use std::fmt::Debug;

use anyhow::{anyhow, bail, Result};
use engine::{GameEngine, ValidActions};
use log::debug;

use crate::{Evaluator, Strategy};

/// Score of a won terminal state. Lost states score the negation and draws score zero, which
/// keeps decided games outside the range of any static evaluation.
pub const TERMINAL_SCORE: f32 = 1000.0;

/// Depth limited minimax with alpha-beta pruning.
///
/// Positions more than `depth` plies below the first move are scored by the evaluator, as are
/// terminal positions through their utility. The player to move at the root maximises.
pub struct AlphaBetaStrategy<'a, E, V> {
    game_engine: &'a E,
    evaluator: V,
    depth: usize,
}

impl<'a, E, V> AlphaBetaStrategy<'a, E, V> {
    pub fn new(game_engine: &'a E, evaluator: V, depth: usize) -> Self {
        Self {
            game_engine,
            evaluator,
            depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<'a, E, V, S, A> AlphaBetaStrategy<'a, E, V>
where
    E: GameEngine<State = S, Action = A> + ValidActions<State = S, Action = A>,
    V: Evaluator<S>,
{
    /// Best move for the player to move with its minimax score. Ties go to the first move in legal
    /// move order.
    pub fn search(&self, game_state: &S) -> Result<(A, f32)> {
        let game_engine = self.game_engine;

        if game_engine.is_terminal_state(game_state) {
            bail!("Cannot choose an action from a terminal state");
        }

        let player = game_engine.player_to_move(game_state);
        let mut best: Option<(A, f32)> = None;
        let mut alpha = f32::NEG_INFINITY;

        for action in game_engine.valid_actions(game_state) {
            let next_state = game_engine.take_action(game_state, &action);
            let score = self.alpha_beta(&next_state, player, alpha, f32::INFINITY, 1);

            if best.is_none() || score > alpha {
                alpha = score;
                best = Some((action, score));
            }
        }

        best.ok_or_else(|| anyhow!("Non-terminal state has no legal moves"))
    }

    fn alpha_beta(
        &self,
        game_state: &S,
        player: usize,
        mut alpha: f32,
        mut beta: f32,
        depth: usize,
    ) -> f32 {
        let game_engine = self.game_engine;

        if let Some(utility) = game_engine.utility(game_state, player) {
            return (utility - 0.5) * 2.0 * TERMINAL_SCORE;
        }

        if depth > self.depth {
            return self.evaluator.evaluate(game_state, player);
        }

        let maximising = game_engine.player_to_move(game_state) == player;
        let mut value = if maximising {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        };

        for action in game_engine.valid_actions(game_state) {
            let next_state = game_engine.take_action(game_state, &action);
            let score = self.alpha_beta(&next_state, player, alpha, beta, depth + 1);

            if maximising {
                value = value.max(score);
                if value >= beta {
                    return value;
                }
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                if value <= alpha {
                    return value;
                }
                beta = beta.min(value);
            }
        }

        value
    }
}

impl<'a, E, V, S, A> Strategy for AlphaBetaStrategy<'a, E, V>
where
    A: Debug,
    E: GameEngine<State = S, Action = A> + ValidActions<State = S, Action = A>,
    V: Evaluator<S>,
{
    type State = S;
    type Action = A;

    fn choose_action(&mut self, game_state: &S) -> Result<A> {
        let (action, score) = self.search(game_state)?;

        debug!("Alpha-beta chose {:?} with a score of {}", action, score);

        Ok(action)
    }

    fn name(&self) -> &str {
        "alpha-beta"
    }
}
