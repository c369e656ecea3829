mod config;
mod fs;
mod rng;

pub use config::*;
pub use fs::*;
pub use rng::*;
