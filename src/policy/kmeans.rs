use super::*;
use crate::Cluster;
use crate::ClusterError;
use crate::KMEANS_CONVERGENCE_DELTA;
use crate::Point;
use crate::Probability;
use crate::Result;

/// Hard assignment to the nearest model.
///
/// Probabilities are normalized pdfs; selection collapses them to a
/// one-hot vector at the most likely model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeans {
    delta: f64,
}

impl KMeans {
    pub fn new(delta: f64) -> Result<Self> {
        if delta.is_finite() && delta >= 0. {
            Ok(Self { delta })
        } else {
            Err(ClusterError::invalid("convergence delta", delta, "finite and >= 0"))
        }
    }
    pub fn delta(&self) -> f64 {
        self.delta
    }
}

impl Default for KMeans {
    fn default() -> Self {
        Self {
            delta: KMEANS_CONVERGENCE_DELTA,
        }
    }
}

impl Policy for KMeans {
    fn select(&self, probabilities: Vec<Probability>) -> Vec<Probability> {
        one_hot(probabilities)
    }
    fn classify(&self, point: &Point, models: &[Cluster]) -> Result<Vec<Probability>> {
        normalized_pdfs(point, models)
    }
    fn update(&mut self, _: &[Cluster]) {}
}
