use super::*;
use crate::Probability;

/// What happened to a single point.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// best weight fell below the outlier threshold
    Discarded { best: Probability },
    /// one record under `best_only`, otherwise one per cluster above threshold
    Retained(Vec<Classified>),
}

impl Outcome {
    pub fn is_discarded(&self) -> bool {
        matches!(self, Self::Discarded { .. })
    }
    pub fn records(&self) -> &[Classified] {
        match self {
            Self::Discarded { .. } => &[],
            Self::Retained(records) => records,
        }
    }
}

impl From<Outcome> for Vec<Classified> {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Discarded { .. } => Vec::new(),
            Outcome::Retained(records) => records,
        }
    }
}
