pub mod cluster;
pub use cluster::*;

pub mod classifier;
pub use classifier::*;
