use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use anyhow::{bail, Result};
use common::create_rng_from_seed;
use engine::{CanonicalBoard, GameEngine, ValidActions};
use log::debug;
use mcts::{MCTSOptions, MCTS};
use rand::rngs::StdRng;
use rand::Rng;

use crate::Strategy;

/// How much searching to do before each move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RolloutBudget {
    Rollouts(usize),
    Time(Duration),
}

/// Searches a fresh tree from the current position on every turn.
pub struct MCTSStrategy<'a, E> {
    game_engine: &'a E,
    options: MCTSOptions,
    budget: RolloutBudget,
    rng: StdRng,
}

impl<'a, E> MCTSStrategy<'a, E> {
    pub fn new(game_engine: &'a E, options: MCTSOptions, budget: RolloutBudget) -> Self {
        let rng = create_rng_from_seed(options.seed);

        Self {
            game_engine,
            options,
            budget,
            rng,
        }
    }

    pub fn budget(&self) -> RolloutBudget {
        self.budget
    }
}

impl<'a, E, S, A> Strategy for MCTSStrategy<'a, E>
where
    S: Clone + Debug,
    A: Clone + Debug + Hash + Ord,
    E: GameEngine<State = S, Action = A>
        + ValidActions<State = S, Action = A>
        + CanonicalBoard<State = S>,
{
    type State = S;
    type Action = A;

    fn choose_action(&mut self, game_state: &S) -> Result<A> {
        if self.game_engine.is_terminal_state(game_state) {
            bail!("Cannot choose an action from a terminal state");
        }

        // Per-turn seed drawn from the strategy generator.
        let options = MCTSOptions {
            seed: Some(self.rng.gen()),
            ..self.options.clone()
        };

        let mut mcts = MCTS::new(self.game_engine, options);

        let rollouts = match self.budget {
            RolloutBudget::Rollouts(rollouts) => mcts.search_rollouts(game_state, rollouts)?,
            RolloutBudget::Time(duration) => mcts.search_time(game_state, duration)?,
        };

        if rollouts == 0 {
            bail!("A rollout budget of zero leaves nothing to choose from");
        }

        let action = mcts.choose(game_state)?;

        debug!(
            "MCTS chose {:?} after {} rollouts. {:?}",
            action,
            rollouts,
            mcts.principal_variation(game_state, 5)
        );

        Ok(action)
    }

    fn name(&self) -> &str {
        "mcts"
    }
}
