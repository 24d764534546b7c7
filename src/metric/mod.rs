pub mod measure;
pub use measure::*;

pub mod measures;
pub use measures::*;
