use std::fmt::Debug;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context, Result};
use engine::{GameEngine, ValidActions, Value};
use log::{debug, info, trace};
use serde::Serialize;
use strategies::Strategy;

use crate::ArenaOptions;

pub struct Arena {}

#[derive(Clone, Debug, Serialize)]
pub struct GameRecord<A> {
    pub actions: Vec<A>,
    /// Final reward of player 1 and player 2.
    pub scores: [f32; 2],
    /// `None` when the game was drawn.
    pub winner: Option<usize>,
    pub duration: Duration,
}

/// Results of a match, counted from the perspective of the first strategy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult {
    pub name: String,
    pub num_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub win_rate: f32,
    pub average_game_duration_ms: f64,
}

impl Arena {
    /// Plays a single game from `initial_state`. `first` plays as player 1 and `second` as
    /// player 2.
    pub fn play_game<E, S, A, P1, P2>(
        game_engine: &E,
        initial_state: &S,
        first: &mut P1,
        second: &mut P2,
    ) -> Result<GameRecord<A>>
    where
        S: Clone,
        A: Clone + Debug + PartialEq,
        E: GameEngine<State = S, Action = A> + ValidActions<State = S, Action = A>,
        P1: Strategy<State = S, Action = A>,
        P2: Strategy<State = S, Action = A>,
    {
        let start = Instant::now();
        let mut actions = Vec::new();
        let mut state = initial_state.clone();

        while !game_engine.is_terminal_state(&state) {
            let player_to_move = game_engine.player_to_move(&state);

            let (name, action) = match player_to_move {
                1 => (first.name().to_string(), first.choose_action(&state)),
                2 => (second.name().to_string(), second.choose_action(&state)),
                player => bail!("Unexpected player to move: {}", player),
            };

            let action =
                action.with_context(|| format!("Strategy {} failed to choose an action", name))?;

            if !game_engine.valid_actions(&state).any(|a| a == action) {
                bail!("Strategy {} chose an illegal action: {:?}", name, action);
            }

            trace!(
                "Move {}: {} played {:?}",
                game_engine.move_number(&state),
                name,
                action
            );

            state = game_engine.take_action(&state, &action);
            actions.push(action);
        }

        let terminal = game_engine
            .terminal_state(&state)
            .ok_or_else(|| anyhow!("Expected a terminal state"))?;

        let scores = [
            terminal.get_value_for_player(1),
            terminal.get_value_for_player(2),
        ];

        let winner = if scores[0] > scores[1] {
            Some(1)
        } else if scores[1] > scores[0] {
            Some(2)
        } else {
            None
        };

        Ok(GameRecord {
            actions,
            scores,
            winner,
            duration: start.elapsed(),
        })
    }

    /// Plays `options.num_games` games between `first` and `second`.
    pub fn play_match<E, S, A, P1, P2>(
        name: &str,
        game_engine: &E,
        initial_state: &S,
        first: &mut P1,
        second: &mut P2,
        options: &ArenaOptions,
    ) -> Result<MatchResult>
    where
        S: Clone,
        A: Clone + Debug + PartialEq,
        E: GameEngine<State = S, Action = A> + ValidActions<State = S, Action = A>,
        P1: Strategy<State = S, Action = A>,
        P2: Strategy<State = S, Action = A>,
    {
        if options.num_games == 0 {
            bail!("A match needs at least one game");
        }

        info!(
            "Starting match {}: {} vs {}, Games: {}",
            name,
            first.name(),
            second.name(),
            options.num_games
        );

        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;
        let mut total_duration = Duration::ZERO;

        for game_num in 0..options.num_games {
            let first_moves_first = !options.swap_sides || game_num % 2 == 0;

            let (game, first_player) = if first_moves_first {
                (Self::play_game(game_engine, initial_state, first, second)?, 1)
            } else {
                (Self::play_game(game_engine, initial_state, second, first)?, 2)
            };

            match game.winner {
                Some(winner) if winner == first_player => wins += 1,
                Some(_) => losses += 1,
                None => draws += 1,
            }

            total_duration += game.duration;

            debug!(
                "Game {} finished in {:?} after {} moves. Winner: {:?}, Wins: {}, Losses: {}, Draws: {}",
                game_num + 1,
                game.duration,
                game.actions.len(),
                game.winner,
                wins,
                losses,
                draws
            );
        }

        let match_result = MatchResult {
            name: name.to_string(),
            num_games: options.num_games,
            wins,
            losses,
            draws,
            win_rate: wins as f32 / options.num_games as f32,
            average_game_duration_ms: total_duration.as_secs_f64() * 1000.0
                / options.num_games as f64,
        };

        info!(
            "Finished match {}. Win rate: {:.1}%, Average game duration: {:.2}ms",
            name,
            match_result.win_rate * 100.0,
            match_result.average_game_duration_ms
        );

        Ok(match_result)
    }
}
