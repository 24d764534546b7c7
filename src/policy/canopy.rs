use super::*;
use crate::CANOPY_T1;
use crate::CANOPY_T2;
use crate::Cluster;
use crate::ClusterError;
use crate::Point;
use crate::Probability;
use crate::Result;

/// Hard assignment to canopies.
///
/// Carries the loose (`t1`) and tight (`t2`) thresholds the canopies were
/// built with so a later pass can reconstruct the run. Classification and
/// selection match [`KMeans`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canopy {
    t1: f64,
    t2: f64,
}

impl Canopy {
    pub fn new(t1: f64, t2: f64) -> Result<Self> {
        if !(t2.is_finite() && t2 > 0.) {
            return Err(ClusterError::invalid("t2", t2, "finite and > 0"));
        }
        if !(t1.is_finite() && t1 > t2) {
            return Err(ClusterError::invalid("t1", t1, "finite and > t2"));
        }
        Ok(Self { t1, t2 })
    }
    pub fn t1(&self) -> f64 {
        self.t1
    }
    pub fn t2(&self) -> f64 {
        self.t2
    }
}

impl Default for Canopy {
    fn default() -> Self {
        Self {
            t1: CANOPY_T1,
            t2: CANOPY_T2,
        }
    }
}

impl Policy for Canopy {
    fn select(&self, probabilities: Vec<Probability>) -> Vec<Probability> {
        one_hot(probabilities)
    }
    fn classify(&self, point: &Point, models: &[Cluster]) -> Result<Vec<Probability>> {
        normalized_pdfs(point, models)
    }
    fn update(&mut self, _: &[Cluster]) {}
}
