pub mod policy;
pub use policy::*;

pub mod select;
pub use select::*;

pub mod fuzzy;
pub use fuzzy::*;

pub mod kmeans;
pub use kmeans::*;

pub mod canopy;
pub use canopy::*;

pub mod policies;
pub use policies::*;
