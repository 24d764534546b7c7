use crate::Cluster;
use crate::Point;
use crate::Probability;
use crate::Result;

/// Strategy for assigning points to clusters.
///
/// `classify` derives one probability per model, indexed like `models`.
/// `select` turns those probabilities into the weights actually used for
/// assignment. `update` advances policy state between iterations.
///
/// `classify` and `select` take `&self` and must not mutate shared state, so
/// any number of points can be classified concurrently against one policy.
/// `update` takes `&mut self`, which keeps it strictly between passes.
///
/// Persistence lives in [`crate::Codec`].
pub trait Policy: Send + Sync {
    fn select(&self, probabilities: Vec<Probability>) -> Vec<Probability>;
    fn classify(&self, point: &Point, models: &[Cluster]) -> Result<Vec<Probability>>;
    fn update(&mut self, posterior: &[Cluster]);
}
