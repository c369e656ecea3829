use std::fmt::{self, Display, Formatter};

use engine::{CanonicalBoard, GameEngine, ValidActions};

/// Tug of war on a counter. Player 1 wins when the count reaches the target, player 2 when it
/// reaches zero. `Stay` makes positions repeat, which exercises transpositions and cycles.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct CountingGameState {
    pub p1_turn: bool,
    pub count: usize,
}

impl CountingGameState {
    pub fn new(count: usize) -> Self {
        Self {
            p1_turn: true,
            count,
        }
    }
}

pub struct CountingGameEngine {
    target: usize,
}

impl CountingGameEngine {
    pub fn new(target: usize) -> Self {
        Self { target }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Value(pub [f32; 2]);

impl engine::Value for Value {
    fn get_value_for_player(&self, player: usize) -> f32 {
        self.0[player - 1]
    }
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub enum CountingAction {
    Increment,
    Decrement,
    Stay,
}

impl Display for CountingAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl GameEngine for CountingGameEngine {
    type Action = CountingAction;
    type State = CountingGameState;
    type Terminal = Value;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        let count = game_state.count;

        let new_count = match action {
            CountingAction::Increment => count + 1,
            CountingAction::Decrement => count - 1,
            CountingAction::Stay => count,
        };

        Self::State {
            p1_turn: !game_state.p1_turn,
            count: new_count,
        }
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Terminal> {
        if game_state.count >= self.target {
            Some(Value([1.0, 0.0]))
        } else if game_state.count == 0 {
            Some(Value([0.0, 1.0]))
        } else {
            None
        }
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        if game_state.p1_turn {
            1
        } else {
            2
        }
    }

    fn move_number(&self, _game_state: &Self::State) -> usize {
        0
    }
}

impl ValidActions for CountingGameEngine {
    type Action = CountingAction;
    type State = CountingGameState;

    fn valid_actions(&self, game_state: &Self::State) -> impl Iterator<Item = Self::Action> {
        let actions: &[CountingAction] = if self.is_terminal_state(game_state) {
            &[]
        } else {
            &[
                CountingAction::Increment,
                CountingAction::Decrement,
                CountingAction::Stay,
            ]
        };

        actions.iter().cloned()
    }
}

impl CanonicalBoard for CountingGameEngine {
    type State = CountingGameState;
    type Board = usize;

    fn canonical_board(&self, game_state: &Self::State) -> Self::Board {
        game_state.count
    }
}
