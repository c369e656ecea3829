/// Static estimate of how good a non-terminal state is for `player`. Larger is better.
pub trait Evaluator<S> {
    fn evaluate(&self, game_state: &S, player: usize) -> f32;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S, usize) -> f32,
{
    fn evaluate(&self, game_state: &S, player: usize) -> f32 {
        self(game_state, player)
    }
}
