use engine::GameEngine;
use gomoku::{Action, GameState, Gomoku};
use mcts::MCTSOptions;
use strategies::{AlphaBetaStrategy, MCTSStrategy, RandomStrategy, RolloutBudget, Strategy};

fn neutral(_: &GameState, _: usize) -> f32 {
    0.0
}

fn play(game_engine: &Gomoku, moves: &[(usize, usize)]) -> GameState {
    moves
        .iter()
        .fold(game_engine.initial_state(), |state, &(row, col)| {
            game_engine.take_action(&state, &Action::new(row, col))
        })
}

fn play_out<P1, P2>(game_engine: &Gomoku, x: &mut P1, o: &mut P2) -> GameState
where
    P1: Strategy<State = GameState, Action = Action>,
    P2: Strategy<State = GameState, Action = Action>,
{
    let mut state = game_engine.initial_state();

    while !game_engine.is_terminal_state(&state) {
        let action = if game_engine.player_to_move(&state) == 1 {
            x.choose_action(&state).unwrap()
        } else {
            o.choose_action(&state).unwrap()
        };

        state = game_engine.take_action(&state, &action);
    }

    state
}

#[test]
fn test_perfect_play_is_a_draw() {
    let game_engine = Gomoku::tic_tac_toe();
    let mut x = AlphaBetaStrategy::new(&game_engine, neutral, 9);
    let mut o = AlphaBetaStrategy::new(&game_engine, neutral, 9);

    let state = play_out(&game_engine, &mut x, &mut o);

    assert_eq!(game_engine.utility(&state, 1), Some(0.5));
}

#[test]
fn test_perfect_play_never_loses_to_random() {
    let game_engine = Gomoku::tic_tac_toe();

    for seed in 0..5 {
        let mut x = AlphaBetaStrategy::new(&game_engine, neutral, 9);
        let mut o = RandomStrategy::new(&game_engine, Some(seed));

        let state = play_out(&game_engine, &mut x, &mut o);

        assert!(game_engine.utility(&state, 1).unwrap() >= 0.5);
    }
}

#[test]
fn test_mcts_blocks_a_threat() {
    let game_engine = Gomoku::tic_tac_toe();
    // X . .
    // O O .
    // . . X
    let state = play(&game_engine, &[(1, 1), (2, 1), (3, 3), (2, 2)]);

    let mut strategy = MCTSStrategy::new(
        &game_engine,
        MCTSOptions::new(1.0, Some(11)),
        RolloutBudget::Rollouts(2000),
    );

    assert_eq!(strategy.choose_action(&state).unwrap(), Action::new(2, 3));
}

#[test]
fn test_every_strategy_reports_its_name() {
    let game_engine = Gomoku::tic_tac_toe();

    assert_eq!(RandomStrategy::new(&game_engine, Some(0)).name(), "random");
    assert_eq!(
        AlphaBetaStrategy::new(&game_engine, neutral, 2).name(),
        "alpha-beta"
    );
    assert_eq!(
        MCTSStrategy::new(&game_engine, MCTSOptions::default(), RolloutBudget::Rollouts(1)).name(),
        "mcts"
    );
}
