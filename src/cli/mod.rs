pub mod args;
pub use args::*;

pub mod input;
pub use input::*;
