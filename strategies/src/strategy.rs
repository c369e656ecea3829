use anyhow::Result;

/// A player that picks a legal move for the player to move in a non-terminal state.
pub trait Strategy {
    type State;
    type Action;

    /// Fails when `game_state` is terminal.
    fn choose_action(&mut self, game_state: &Self::State) -> Result<Self::Action>;

    fn name(&self) -> &str;
}
