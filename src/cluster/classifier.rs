use crate::Cluster;
use crate::Codec;
use crate::Point;
use crate::Policy;
use crate::Probability;
use crate::Result;
use std::path::Path;

/// The posterior of a clustering run: its final models and the policy
/// that assigns points to them.
///
/// This is what the training phase hands to a later classification phase.
/// Only the policy state is persisted here; model layout on disk belongs
/// to the upstream stage.
#[derive(Debug, Clone)]
pub struct Classifier<P> {
    models: Vec<Cluster>,
    policy: P,
}

impl<P> Classifier<P>
where
    P: Policy,
{
    pub fn new(models: Vec<Cluster>, policy: P) -> Self {
        Self { models, policy }
    }
    pub fn models(&self) -> &[Cluster] {
        &self.models
    }
    pub fn policy(&self) -> &P {
        &self.policy
    }
    /// raw per-model probabilities, before selection
    pub fn classify(&self, point: &Point) -> Result<Vec<Probability>> {
        self.policy.classify(point, &self.models)
    }
    /// only between passes, never during classification
    pub fn update(&mut self) {
        self.policy.update(&self.models);
    }
}

impl<P> Classifier<P>
where
    P: Policy + Codec,
{
    /// write policy state into a clustering output directory
    pub fn save(&self, dir: &Path) -> Result<()> {
        crate::codec::save(dir, &self.policy)
    }
    /// pair freshly read models with policy state from a prior run
    pub fn load(dir: &Path, models: Vec<Cluster>) -> Result<Self> {
        Ok(Self::new(models, crate::codec::load(dir)?))
    }
}
