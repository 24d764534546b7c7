use super::*;
use crate::Cluster;
use crate::ClusterError;
use crate::FUZZY_CONVERGENCE_DELTA;
use crate::Membership;
use crate::Point;
use crate::Probability;
use crate::Result;

/// Probability-weighted assignment, as used by fuzzy k-means.
///
/// Memberships come from [`Membership`] over each model's own measure.
/// Selection is the identity; every model keeps its share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyKMeans {
    membership: Membership,
    delta: f64,
}

impl FuzzyKMeans {
    pub fn new(m: f64, delta: f64) -> Result<Self> {
        let membership = Membership::new(m)?;
        if delta.is_finite() && delta >= 0. {
            Ok(Self { membership, delta })
        } else {
            Err(ClusterError::invalid("convergence delta", delta, "finite and >= 0"))
        }
    }
    /// fuzzifier exponent
    pub fn m(&self) -> f64 {
        self.membership.m()
    }
    pub fn delta(&self) -> f64 {
        self.delta
    }
}

impl Default for FuzzyKMeans {
    fn default() -> Self {
        Self {
            membership: Membership::default(),
            delta: FUZZY_CONVERGENCE_DELTA,
        }
    }
}

impl Policy for FuzzyKMeans {
    fn select(&self, probabilities: Vec<Probability>) -> Vec<Probability> {
        probabilities
    }
    fn classify(&self, point: &Point, models: &[Cluster]) -> Result<Vec<Probability>> {
        let ref distances = crate::distances(point, models)?;
        self.membership.compute(distances)
    }
    /// inert: fuzzy state does not adapt between iterations
    fn update(&mut self, _: &[Cluster]) {}
}
