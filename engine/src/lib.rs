pub mod canonical_board;
pub mod engine;
pub mod valid_actions;
pub mod value;

pub use crate::canonical_board::*;
pub use crate::engine::*;
pub use crate::valid_actions::*;
pub use crate::value::*;
