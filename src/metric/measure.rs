use crate::Energy;
use crate::Point;

/// Dissimilarity between two points.
///
/// Implementations must return finite, non-negative values. The classification
/// core checks this contract on every call and fails the point otherwise.
/// `Send + Sync` so a single measure can back models shared across workers.
pub trait Measure: Send + Sync + std::fmt::Debug {
    fn distance(&self, x: &Point, y: &Point) -> Energy;
    fn name(&self) -> &'static str;
}
