use anyhow::{ensure, Result};
use engine::{CanonicalBoard, GameEngine, ValidActions};

use crate::{Action, GameState, Value};

pub const DEFAULT_WIDTH: usize = 16;
pub const DEFAULT_HEIGHT: usize = 15;
pub const DEFAULT_K: usize = 5;

/// k-in-a-row on a `height` x `width` board. Player 1 plays X and moves first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gomoku {
    width: usize,
    height: usize,
    k: usize,
}

impl Gomoku {
    pub fn new(width: usize, height: usize, k: usize) -> Result<Self> {
        ensure!(width > 0 && height > 0, "The board must have at least one square");
        ensure!(
            k > 0 && k <= width.max(height),
            "A line of {} cannot fit on a {}x{} board",
            k,
            height,
            width
        );

        Ok(Self { width, height, k })
    }

    pub fn tic_tac_toe() -> Self {
        Self {
            width: 3,
            height: 3,
            k: 3,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn initial_state(&self) -> GameState {
        GameState::initial(self.width, self.height)
    }
}

impl Default for Gomoku {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            k: DEFAULT_K,
        }
    }
}

impl GameEngine for Gomoku {
    type Action = Action;
    type State = GameState;
    type Terminal = Value;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        game_state.place_stone(action, self.k)
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Terminal> {
        game_state.is_terminal()
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_to_move()
    }

    fn move_number(&self, game_state: &Self::State) -> usize {
        game_state.num_stones() + 1
    }
}

impl ValidActions for Gomoku {
    type Action = Action;
    type State = GameState;

    fn valid_actions(&self, game_state: &Self::State) -> impl Iterator<Item = Self::Action> {
        game_state.valid_actions()
    }
}

impl CanonicalBoard for Gomoku {
    type State = GameState;
    type Board = Box<[u8]>;

    fn canonical_board(&self, game_state: &Self::State) -> Self::Board {
        game_state.cells().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn play(engine: &Gomoku, moves: &[(usize, usize)]) -> GameState {
        moves
            .iter()
            .fold(engine.initial_state(), |state, &(row, col)| {
                engine.take_action(&state, &Action::new(row, col))
            })
    }

    #[test]
    fn test_default_board() {
        let engine = Gomoku::default();
        let state = engine.initial_state();

        assert_eq!(engine.k(), 5);
        assert_eq!(engine.valid_actions(&state).count(), 240);
        assert_eq!(engine.valid_actions(&state).next(), Some(Action::new(1, 1)));
        assert_eq!(engine.valid_actions(&state).last(), Some(Action::new(15, 16)));
    }

    #[test]
    fn test_new_rejects_impossible_lines() {
        assert!(Gomoku::new(3, 3, 4).is_err());
        assert!(Gomoku::new(0, 3, 1).is_err());
        assert!(Gomoku::new(3, 3, 0).is_err());
        assert!(Gomoku::new(7, 6, 4).is_ok());
    }

    #[test]
    fn test_player_to_move_and_move_number() {
        let engine = Gomoku::tic_tac_toe();
        let state = engine.initial_state();

        assert_eq!(engine.player_to_move(&state), 1);
        assert_eq!(engine.move_number(&state), 1);

        let state = play(&engine, &[(2, 2)]);

        assert_eq!(engine.player_to_move(&state), 2);
        assert_eq!(engine.move_number(&state), 2);
    }

    #[test]
    fn test_terminal_state_and_utility() {
        let engine = Gomoku::tic_tac_toe();
        let state = play(&engine, &[(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)]);

        assert!(engine.is_terminal_state(&state));
        assert_eq!(engine.valid_actions(&state).count(), 0);
        assert_approx_eq!(engine.utility(&state, 1).unwrap(), 1.0);
        assert_approx_eq!(engine.utility(&state, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_utility_is_none_mid_game() {
        let engine = Gomoku::tic_tac_toe();
        let state = play(&engine, &[(1, 1)]);

        assert!(!engine.is_terminal_state(&state));
        assert_eq!(engine.utility(&state, 1), None);
    }

    #[test]
    fn test_transpositions_share_a_canonical_board() {
        let engine = Gomoku::tic_tac_toe();
        let a = play(&engine, &[(1, 1), (2, 2), (3, 3)]);
        let b = play(&engine, &[(3, 3), (2, 2), (1, 1)]);
        let c = play(&engine, &[(3, 3), (1, 1), (2, 2)]);

        assert_eq!(engine.canonical_board(&a), engine.canonical_board(&b));
        assert_ne!(engine.canonical_board(&a), engine.canonical_board(&c));
    }

    #[test]
    fn test_k_of_one_wins_immediately() {
        let engine = Gomoku::new(2, 2, 1).unwrap();
        let state = play(&engine, &[(2, 1)]);

        assert_eq!(engine.terminal_state(&state), Some(Value([1.0, 0.0])));
    }
}
