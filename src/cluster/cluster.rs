use crate::ClusterError;
use crate::ClusterId;
use crate::Energy;
use crate::Measure;
use crate::Point;
use crate::Probability;
use crate::Result;
use std::sync::Arc;

/// A finalized cluster model produced by the upstream clustering stage.
///
/// Read-only during classification. The measure is shared behind an `Arc`
/// so many models, and many workers, can point at the same instance.
#[derive(Debug, Clone)]
pub struct Cluster {
    id: ClusterId,
    center: Point,
    measure: Arc<dyn Measure>,
}

impl Cluster {
    pub fn new(id: ClusterId, center: Point, measure: Arc<dyn Measure>) -> Self {
        Self {
            id,
            center,
            measure,
        }
    }
    pub fn id(&self) -> ClusterId {
        self.id
    }
    pub fn center(&self) -> &Point {
        &self.center
    }
    pub fn measure(&self) -> &dyn Measure {
        self.measure.as_ref()
    }
    /// raw distance from the center, unchecked
    pub fn distance(&self, x: &Point) -> Energy {
        self.measure.distance(x, &self.center)
    }
    /// likelihood-like score that decays with distance
    pub fn pdf(&self, x: &Point) -> Probability {
        1. / (1. + self.distance(x))
    }
}

/// Distances from `point` to every model center, in model order.
/// Fails on an empty model list, on the first center whose dimension
/// differs from the point's, or on the first model whose measure
/// breaks the finite non-negative contract.
pub fn distances(point: &Point, models: &[Cluster]) -> Result<Vec<Energy>> {
    if models.is_empty() {
        return Err(ClusterError::EmptyModels);
    }
    models
        .iter()
        .enumerate()
        .map(|(index, model)| {
            conform(index, point, model.center())?;
            validate(index, model.distance(point))
        })
        .collect()
}

/// a point and a center must share dimensionality
pub fn conform(index: usize, point: &Point, center: &Point) -> Result<()> {
    if point.dim() == center.dim() {
        Ok(())
    } else {
        Err(ClusterError::DimensionMismatch {
            index,
            expected: center.dim(),
            actual: point.dim(),
        })
    }
}

/// a single distance must be finite and non-negative
pub fn validate(index: usize, value: Energy) -> Result<Energy> {
    if value.is_finite() && value >= 0. {
        Ok(value)
    } else {
        Err(ClusterError::DistanceViolation { index, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Manhattan;

    #[derive(Debug)]
    struct Broken(Energy);
    impl Measure for Broken {
        fn distance(&self, _: &Point, _: &Point) -> Energy {
            self.0
        }
        fn name(&self) -> &'static str {
            "broken"
        }
    }

    fn grid() -> Vec<Cluster> {
        [[0., 0.], [10., 10.], [20., 20.]]
            .into_iter()
            .enumerate()
            .map(|(i, c)| Cluster::new(i as ClusterId, Point::from(c), Arc::new(Manhattan)))
            .collect()
    }

    #[test]
    fn distances_follow_model_order() {
        let ref point = Point::from([1., 1.]);
        assert_eq!(distances(point, &grid()).unwrap(), vec![2., 18., 38.]);
    }
    #[test]
    fn distances_reject_empty_models() {
        let ref point = Point::from([1., 1.]);
        assert!(matches!(distances(point, &[]), Err(ClusterError::EmptyModels)));
    }
    #[test]
    fn distances_name_offending_model() {
        let ref point = Point::from([1., 1.]);
        for bad in [-1., Energy::NAN, Energy::INFINITY] {
            let mut models = grid();
            models.push(Cluster::new(9, Point::zeroes(2), Arc::new(Broken(bad))));
            match distances(point, &models) {
                Err(ClusterError::DistanceViolation { index, .. }) => assert_eq!(index, 3),
                other => panic!("expected violation, got {:?}", other),
            }
        }
    }
    #[test]
    fn distances_reject_mismatched_dimensions() {
        for point in [Point::from([9., 9., 500.]), Point::from([1.])] {
            match distances(&point, &grid()) {
                Err(ClusterError::DimensionMismatch {
                    index,
                    expected,
                    actual,
                }) => assert_eq!((index, expected, actual), (0, 2, point.dim())),
                other => panic!("expected mismatch, got {:?}", other),
            }
        }
    }
    #[test]
    fn mismatch_names_first_offending_model() {
        let mut models = grid();
        models.insert(1, Cluster::new(7, Point::zeroes(3), Arc::new(Manhattan)));
        let result = distances(&Point::from([1., 1.]), &models);
        assert!(matches!(
            result,
            Err(ClusterError::DimensionMismatch { index: 1, .. })
        ));
    }
    #[test]
    fn pdf_decays_with_distance() {
        let models = grid();
        let ref point = Point::from([1., 1.]);
        assert_eq!(models[0].pdf(point), 1. / 3.);
        assert!(models[0].pdf(point) > models[1].pdf(point));
        assert!(models[1].pdf(point) > models[2].pdf(point));
    }
}
