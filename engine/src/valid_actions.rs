pub trait ValidActions {
    type Action;
    type State;

    /// Legal moves in a stable order without duplicates. Empty only at terminal states.
    fn valid_actions(&self, game_state: &Self::State) -> impl Iterator<Item = Self::Action>;
}
