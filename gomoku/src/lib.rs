mod action;
mod engine;
mod game_state;
mod heuristic;
mod value;

pub use self::action::*;
pub use self::engine::*;
pub use self::game_state::*;
pub use self::heuristic::*;
pub use self::value::*;
