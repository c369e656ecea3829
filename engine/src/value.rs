/// Outcome of a finished game. Values are normalised to `[0, 1]` with `1.0` a win and `0.5` a
/// draw, so that the reward of one player is `1 - reward` of the other.
pub trait Value: Clone {
    fn get_value_for_player(&self, player: usize) -> f32;
}
