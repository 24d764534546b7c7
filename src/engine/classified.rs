use crate::ClusterId;
use crate::Point;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// A point emitted under one cluster, with the weight it carries there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classified {
    cluster: ClusterId,
    weight: Probability,
    point: Point,
}

impl Classified {
    pub fn new(cluster: ClusterId, weight: Probability, point: Point) -> Self {
        Self {
            cluster,
            weight,
            point,
        }
    }
    pub fn cluster(&self) -> ClusterId {
        self.cluster
    }
    pub fn weight(&self) -> Probability {
        self.weight
    }
    pub fn point(&self) -> &Point {
        &self.point
    }
}

/// the (clusterId, record) pairing handed to a sink
impl From<Classified> for (ClusterId, Classified) {
    fn from(record: Classified) -> Self {
        (record.cluster, record)
    }
}

impl std::fmt::Display for Classified {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{:.6}\t{}", self.cluster, self.weight, self.point)
    }
}
