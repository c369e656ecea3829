use anyhow::{anyhow, bail, Result};
use common::create_rng_from_seed;
use engine::{GameEngine, ValidActions};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;

use crate::Strategy;

/// Plays a uniformly random legal move.
pub struct RandomStrategy<'a, E> {
    game_engine: &'a E,
    rng: StdRng,
}

impl<'a, E> RandomStrategy<'a, E> {
    pub fn new(game_engine: &'a E, seed: Option<u64>) -> Self {
        Self {
            game_engine,
            rng: create_rng_from_seed(seed),
        }
    }
}

impl<'a, E, S, A> Strategy for RandomStrategy<'a, E>
where
    E: GameEngine<State = S, Action = A> + ValidActions<State = S, Action = A>,
{
    type State = S;
    type Action = A;

    fn choose_action(&mut self, game_state: &S) -> Result<A> {
        if self.game_engine.is_terminal_state(game_state) {
            bail!("Cannot choose an action from a terminal state");
        }

        self.game_engine
            .valid_actions(game_state)
            .choose(&mut self.rng)
            .ok_or_else(|| anyhow!("Non-terminal state has no legal moves"))
    }

    fn name(&self) -> &str {
        "random"
    }
}
