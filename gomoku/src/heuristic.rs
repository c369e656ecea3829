use crate::GameState;

const OWN_CENTRE_STONE: f32 = 0.05;
const OWN_EDGE_STONE: f32 = -0.01;
const OPPONENT_CENTRE_STONE: f32 = -0.05;
const OPPONENT_VERTICAL_THREE: f32 = -0.5;
const OPPONENT_VERTICAL_FOUR: f32 = -0.3;

/// Static evaluation of a position for bounded-depth search.
///
/// Rewards holding the centre column, slightly penalises stones on the outer columns and
/// penalises vertical runs of opponent stones. Scores are relative to `player` and are not
/// normalised.
#[derive(Clone, Copy, Debug, Default)]
pub struct GomokuHeuristic;

impl GomokuHeuristic {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, game_state: &GameState, player: usize) -> f32 {
        let own = player as u8;
        let opponent = if player == 1 { 2 } else { 1 };
        let width = game_state.width();
        let centre = (width + 1) / 2;

        let mut score = 0.0;

        for row in 1..=game_state.height() {
            for col in 1..=width {
                let stone = game_state.stone_at(row, col);

                if stone == own {
                    if col == centre {
                        score += OWN_CENTRE_STONE;
                    } else if col == 1 || col == width {
                        score += OWN_EDGE_STONE;
                    }
                } else if stone == opponent && col == centre {
                    score += OPPONENT_CENTRE_STONE;
                }
            }
        }

        for col in 1..=width {
            let mut run = 0;

            for row in 1..=game_state.height() {
                if game_state.stone_at(row, col) == opponent {
                    run += 1;

                    if run == 3 {
                        score += OPPONENT_VERTICAL_THREE;
                    } else if run == 4 {
                        score += OPPONENT_VERTICAL_FOUR;
                    }
                } else {
                    run = 0;
                }
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Gomoku};
    use assert_approx_eq::assert_approx_eq;
    use engine::GameEngine;

    fn play(engine: &Gomoku, moves: &[(usize, usize)]) -> GameState {
        moves
            .iter()
            .fold(engine.initial_state(), |state, &(row, col)| {
                engine.take_action(&state, &Action::new(row, col))
            })
    }

    #[test]
    fn test_empty_board_is_neutral() {
        let engine = Gomoku::default();

        assert_approx_eq!(GomokuHeuristic.evaluate(&engine.initial_state(), 1), 0.0);
        assert_approx_eq!(GomokuHeuristic.evaluate(&engine.initial_state(), 2), 0.0);
    }

    #[test]
    fn test_centre_column_is_favoured() {
        let engine = Gomoku::default();
        let state = play(&engine, &[(1, 8)]);

        assert_approx_eq!(GomokuHeuristic.evaluate(&state, 1), 0.05);
        assert_approx_eq!(GomokuHeuristic.evaluate(&state, 2), -0.05);
    }

    #[test]
    fn test_outer_columns_are_avoided() {
        let engine = Gomoku::default();
        let state = play(&engine, &[(3, 1), (3, 2), (4, 16)]);

        assert_approx_eq!(GomokuHeuristic.evaluate(&state, 1), -0.02);
        assert_approx_eq!(GomokuHeuristic.evaluate(&state, 2), 0.0);
    }

    #[test]
    fn test_opponent_vertical_runs_are_penalised() {
        let engine = Gomoku::default();
        let three = play(&engine, &[(1, 3), (5, 4), (2, 3), (6, 4), (9, 9), (7, 4)]);

        assert_approx_eq!(GomokuHeuristic.evaluate(&three, 1), -0.5);

        let four = engine.take_action(&three, &Action::new(12, 12));
        let four = engine.take_action(&four, &Action::new(8, 4));

        assert_approx_eq!(GomokuHeuristic.evaluate(&four, 1), -0.8);
    }

    #[test]
    fn test_broken_vertical_run_is_not_penalised() {
        let engine = Gomoku::default();
        let state = play(&engine, &[(6, 4), (5, 4), (10, 10), (7, 4), (11, 11), (8, 4)]);

        assert_approx_eq!(GomokuHeuristic.evaluate(&state, 1), 0.0);
    }

    #[test]
    fn test_centre_of_tic_tac_toe() {
        let engine = Gomoku::tic_tac_toe();
        let state = play(&engine, &[(2, 2), (1, 1)]);

        assert_approx_eq!(GomokuHeuristic::new().evaluate(&state, 1), 0.05 + 0.0);
        assert_approx_eq!(GomokuHeuristic::new().evaluate(&state, 2), -0.01 - 0.05);
    }
}
