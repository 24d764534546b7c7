use super::*;
use crate::Cluster;
use crate::Point;
use crate::Probability;
use crate::Result;

/// Tagged union over every policy variant, for callers that pick the
/// policy at runtime or read it back from persisted state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Policies {
    Fuzzy(FuzzyKMeans),
    KMeans(KMeans),
    Canopy(Canopy),
}

impl Policies {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fuzzy(_) => "fuzzy",
            Self::KMeans(_) => "kmeans",
            Self::Canopy(_) => "canopy",
        }
    }
}

impl Default for Policies {
    fn default() -> Self {
        Self::Fuzzy(FuzzyKMeans::default())
    }
}

impl From<FuzzyKMeans> for Policies {
    fn from(p: FuzzyKMeans) -> Self {
        Self::Fuzzy(p)
    }
}
impl From<KMeans> for Policies {
    fn from(p: KMeans) -> Self {
        Self::KMeans(p)
    }
}
impl From<Canopy> for Policies {
    fn from(p: Canopy) -> Self {
        Self::Canopy(p)
    }
}

impl Policy for Policies {
    fn select(&self, probabilities: Vec<Probability>) -> Vec<Probability> {
        match self {
            Self::Fuzzy(p) => p.select(probabilities),
            Self::KMeans(p) => p.select(probabilities),
            Self::Canopy(p) => p.select(probabilities),
        }
    }
    fn classify(&self, point: &Point, models: &[Cluster]) -> Result<Vec<Probability>> {
        match self {
            Self::Fuzzy(p) => p.classify(point, models),
            Self::KMeans(p) => p.classify(point, models),
            Self::Canopy(p) => p.classify(point, models),
        }
    }
    fn update(&mut self, posterior: &[Cluster]) {
        match self {
            Self::Fuzzy(p) => p.update(posterior),
            Self::KMeans(p) => p.update(posterior),
            Self::Canopy(p) => p.update(posterior),
        }
    }
}
