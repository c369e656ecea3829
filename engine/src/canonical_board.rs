use std::fmt::Debug;
use std::hash::Hash;

/// Exposes the board content of a state in a form that does not depend on the order in which
/// moves were played. Two strategically identical positions must produce equal boards.
pub trait CanonicalBoard {
    type State;
    type Board: Clone + Debug + Eq + Hash + Ord;

    fn canonical_board(&self, game_state: &Self::State) -> Self::Board;
}
