use super::value::Value;

/// Rules of a deterministic, perfect-information, two-player game.
///
/// Players are identified by `1` and `2`. Implementations must be pure: `take_action` returns a
/// new state and never mutates its input.
pub trait GameEngine {
    type Action;
    type State;
    type Terminal: Value;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State;
    fn player_to_move(&self, game_state: &Self::State) -> usize;
    fn move_number(&self, game_state: &Self::State) -> usize;

    /// Returns the outcome of the game if the state is terminal.
    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Terminal>;

    fn is_terminal_state(&self, game_state: &Self::State) -> bool {
        self.terminal_state(game_state).is_some()
    }

    /// Reward for `player` at a terminal state, `None` when the game is still in progress.
    fn utility(&self, game_state: &Self::State, player: usize) -> Option<f32> {
        self.terminal_state(game_state)
            .map(|terminal| terminal.get_value_for_player(player))
    }
}
