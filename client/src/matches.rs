use anyhow::Result;
use arena::{Arena, MatchResult};
use gomoku::{GameState, Gomoku, GomokuHeuristic};
use mcts::MCTSOptions;
use strategies::{AlphaBetaStrategy, HybridStrategy, MCTSStrategy, RandomStrategy};

use crate::cli::PlayerKind;
use crate::options::MatchOptions;

/// Plays `player` against the random player. The search strategy always moves first unless
/// sides are swapped.
pub fn play_against_random(
    player: PlayerKind,
    game_engine: &Gomoku,
    options: &MatchOptions,
) -> Result<MatchResult> {
    let seed = options.arena.seed;
    let initial_state = game_engine.initial_state();
    let mut random = RandomStrategy::new(game_engine, seed.map(|seed| seed.wrapping_add(1)));

    let mcts_options = MCTSOptions {
        seed,
        ..options.mcts.clone()
    };
    let strategy_options = &options.strategies;
    let name = player.match_name();

    match player {
        PlayerKind::Mcts => {
            let mut mcts = MCTSStrategy::new(
                game_engine,
                mcts_options,
                strategy_options.rollout_budget(),
            );

            Arena::play_match(
                name,
                game_engine,
                &initial_state,
                &mut mcts,
                &mut random,
                &options.arena,
            )
        }
        PlayerKind::AlphaBeta => {
            let mut alpha_beta = AlphaBetaStrategy::new(
                game_engine,
                heuristic_evaluator(),
                strategy_options.alpha_beta_depth,
            );

            Arena::play_match(
                name,
                game_engine,
                &initial_state,
                &mut alpha_beta,
                &mut random,
                &options.arena,
            )
        }
        PlayerKind::Hybrid => {
            let mut hybrid = HybridStrategy::new(
                game_engine,
                heuristic_evaluator(),
                mcts_options,
                strategy_options,
            );

            Arena::play_match(
                name,
                game_engine,
                &initial_state,
                &mut hybrid,
                &mut random,
                &options.arena,
            )
        }
    }
}

fn heuristic_evaluator() -> impl Fn(&GameState, usize) -> f32 {
    let heuristic = GomokuHeuristic::new();

    move |game_state: &GameState, player: usize| heuristic.evaluate(game_state, player)
}
