use engine::{CanonicalBoard, GameEngine, ValidActions};
use itertools::Itertools;

/// Identity of a position in the search tree.
///
/// Built from the player to move, the canonical board and the sorted set of legal moves. The
/// legal moves guard against state representations whose board alone depends on move order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey<B, A> {
    player_to_move: usize,
    board: B,
    actions: Box<[A]>,
}

impl<B, A> StateKey<B, A> {
    pub fn player_to_move(&self) -> usize {
        self.player_to_move
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn actions(&self) -> &[A] {
        &self.actions
    }
}

pub type StateKeyOf<E, A> = StateKey<<E as CanonicalBoard>::Board, A>;

/// Derives the key of `game_state`. Pure and total: identical logical states produce identical
/// keys regardless of how they were reached.
pub fn key_of<E, S, A>(game_engine: &E, game_state: &S) -> StateKeyOf<E, A>
where
    A: Ord,
    E: GameEngine<State = S, Action = A>
        + ValidActions<State = S, Action = A>
        + CanonicalBoard<State = S>,
{
    let actions = game_engine
        .valid_actions(game_state)
        .sorted()
        .dedup()
        .collect::<Vec<_>>()
        .into_boxed_slice();

    StateKey {
        player_to_move: game_engine.player_to_move(game_state),
        board: game_engine.canonical_board(game_state),
        actions,
    }
}
