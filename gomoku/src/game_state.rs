use std::fmt::{self, Display, Formatter};

use crate::{Action, Value};

pub const EMPTY: u8 = 0;

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A k-in-a-row position. Cells are stored row-major and hold `EMPTY` or the number of the
/// player whose stone occupies them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    width: usize,
    height: usize,
    cells: Box<[u8]>,
    p1_turn_to_move: bool,
    num_stones: usize,
    outcome: Option<Outcome>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(usize),
    Draw,
}

impl GameState {
    pub fn initial(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height].into_boxed_slice(),
            p1_turn_to_move: true,
            num_stones: 0,
            outcome: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn player_to_move(&self) -> usize {
        if self.p1_turn_to_move {
            1
        } else {
            2
        }
    }

    pub fn num_stones(&self) -> usize {
        self.num_stones
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> Option<Value> {
        self.outcome.map(|outcome| match outcome {
            Outcome::Win(player) => Value::win_for(player),
            Outcome::Draw => Value::draw(),
        })
    }

    /// Stone at the 1-based square, `EMPTY` when unoccupied.
    pub fn stone_at(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)]
    }

    pub fn is_on_board(&self, action: &Action) -> bool {
        (1..=self.height).contains(&action.row()) && (1..=self.width).contains(&action.col())
    }

    /// Empty squares in row-major order. No moves remain once the game is decided.
    pub fn valid_actions(&self) -> impl Iterator<Item = Action> + '_ {
        let width = self.width;
        let is_decided = self.outcome.is_some();

        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| !is_decided && **cell == EMPTY)
            .map(move |(idx, _)| Action::new(idx / width + 1, idx % width + 1))
    }

    /// Places the stone of the player to move. Panics if the square is off the board or occupied.
    pub fn place_stone(&self, action: &Action, k: usize) -> Self {
        assert!(
            self.is_on_board(action),
            "Square {} is off the {}x{} board",
            action,
            self.height,
            self.width
        );

        let idx = self.index(action.row(), action.col());
        assert!(
            self.cells[idx] == EMPTY,
            "Square {} is already occupied",
            action
        );

        let player = self.player_to_move();
        let mut cells = self.cells.clone();
        cells[idx] = player as u8;

        let mut next = Self {
            width: self.width,
            height: self.height,
            cells,
            p1_turn_to_move: !self.p1_turn_to_move,
            num_stones: self.num_stones + 1,
            outcome: None,
        };

        next.outcome = if next.completes_line(action, k) {
            Some(Outcome::Win(player))
        } else if next.num_stones == next.cells.len() {
            Some(Outcome::Draw)
        } else {
            None
        };

        next
    }

    /// Whether the stone on `action` is part of a line of at least `k` stones.
    fn completes_line(&self, action: &Action, k: usize) -> bool {
        let stone = self.stone_at(action.row(), action.col());

        DIRECTIONS.iter().any(|&(d_row, d_col)| {
            let forward = self.count_in_direction(action, stone, d_row, d_col);
            let backward = self.count_in_direction(action, stone, -d_row, -d_col);
            1 + forward + backward >= k
        })
    }

    fn count_in_direction(&self, action: &Action, stone: u8, d_row: isize, d_col: isize) -> usize {
        let mut count = 0;
        let mut row = action.row() as isize + d_row;
        let mut col = action.col() as isize + d_col;

        while row >= 1
            && col >= 1
            && row as usize <= self.height
            && col as usize <= self.width
            && self.stone_at(row as usize, col as usize) == stone
        {
            count += 1;
            row += d_row;
            col += d_col;
        }

        count
    }

    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.width + (col - 1)
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line = row
                .iter()
                .map(|cell| match cell {
                    1 => 'X',
                    2 => 'O',
                    _ => '.',
                })
                .collect::<String>();

            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIC_TAC_TOE_K: usize = 3;

    fn play(moves: &[(usize, usize)]) -> GameState {
        moves
            .iter()
            .fold(GameState::initial(3, 3), |state, &(row, col)| {
                state.place_stone(&Action::new(row, col), TIC_TAC_TOE_K)
            })
    }

    #[test]
    fn test_new_state_is_correct() {
        let state = GameState::initial(16, 15);

        assert_eq!(state.player_to_move(), 1);
        assert_eq!(state.num_stones(), 0);
        assert_eq!(state.cells().len(), 240);
        assert!(state.cells().iter().all(|cell| *cell == EMPTY));
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_place_stone_switches_player() {
        let state = play(&[(2, 2)]);

        assert_eq!(state.player_to_move(), 2);
        assert_eq!(state.stone_at(2, 2), 1);

        let state = state.place_stone(&Action::new(1, 1), TIC_TAC_TOE_K);

        assert_eq!(state.player_to_move(), 1);
        assert_eq!(state.stone_at(1, 1), 2);
        assert_eq!(state.num_stones(), 2);
    }

    #[test]
    fn test_valid_actions_row_major() {
        let state = play(&[(1, 2), (2, 2)]);
        let actions = state.valid_actions().collect::<Vec<_>>();

        assert_eq!(
            actions,
            vec![
                Action::new(1, 1),
                Action::new(1, 3),
                Action::new(2, 1),
                Action::new(2, 3),
                Action::new(3, 1),
                Action::new(3, 2),
                Action::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_row_win() {
        let state = play(&[(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)]);

        assert_eq!(state.outcome(), Some(Outcome::Win(1)));
        assert_eq!(state.is_terminal(), Some(Value([1.0, 0.0])));
        assert_eq!(state.valid_actions().count(), 0);
    }

    #[test]
    fn test_column_win_for_second_player() {
        let state = play(&[(1, 1), (1, 3), (2, 2), (2, 3), (3, 1), (3, 3)]);

        assert_eq!(state.outcome(), Some(Outcome::Win(2)));
        assert_eq!(state.is_terminal(), Some(Value([0.0, 1.0])));
    }

    #[test]
    fn test_diagonal_wins() {
        let down = play(&[(1, 1), (1, 2), (2, 2), (1, 3), (3, 3)]);
        assert_eq!(down.outcome(), Some(Outcome::Win(1)));

        let up = play(&[(3, 1), (1, 1), (2, 2), (1, 2), (1, 3)]);
        assert_eq!(up.outcome(), Some(Outcome::Win(1)));
    }

    #[test]
    fn test_win_through_middle_of_line() {
        let state = play(&[(2, 1), (1, 1), (2, 3), (1, 2), (2, 2)]);

        assert_eq!(state.outcome(), Some(Outcome::Win(1)));
    }

    #[test]
    fn test_draw_on_full_board() {
        // X O X
        // X O O
        // O X X
        let state = play(&[
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 2),
            (2, 1),
            (3, 1),
            (3, 2),
            (2, 3),
            (3, 3),
        ]);

        assert_eq!(state.outcome(), Some(Outcome::Draw));
        assert_eq!(state.is_terminal(), Some(Value([0.5, 0.5])));
    }

    #[test]
    fn test_not_terminal_mid_game() {
        let state = play(&[(1, 1), (2, 2), (3, 3)]);

        assert_eq!(state.is_terminal(), None);
    }

    #[test]
    fn test_longer_line_on_wide_board() {
        let mut state = GameState::initial(16, 15);

        for col in 1..=4 {
            state = state.place_stone(&Action::new(8, col), 5);
            assert!(state.outcome().is_none());
            state = state.place_stone(&Action::new(1, col), 5);
            assert!(state.outcome().is_none());
        }

        state = state.place_stone(&Action::new(8, 5), 5);

        assert_eq!(state.outcome(), Some(Outcome::Win(1)));
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_place_stone_on_occupied_square_panics() {
        play(&[(2, 2), (2, 2)]);
    }

    #[test]
    #[should_panic(expected = "off the")]
    fn test_place_stone_off_board_panics() {
        play(&[(4, 1)]);
    }

    #[test]
    fn test_display() {
        let state = play(&[(1, 1), (2, 2)]);

        assert_eq!(state.to_string(), "X..\n.O.\n...\n");
    }
}
