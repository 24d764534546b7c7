pub mod classified;
pub use classified::*;

pub mod outcome;
pub use outcome::*;

pub mod tally;
pub use tally::*;

pub mod partition;
pub use partition::*;

pub mod engine;
pub use engine::*;
