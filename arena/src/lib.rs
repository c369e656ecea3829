mod arena;
mod options;

pub use arena::*;
pub use options::*;
