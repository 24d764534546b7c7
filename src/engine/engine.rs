use super::*;
use crate::Cluster;
use crate::ClusterError;
use crate::BEST_ONLY;
use crate::OUTLIER_THRESHOLD;
use crate::Point;
use crate::Policy;
use crate::Probability;
use crate::Result;
use rayon::prelude::*;

/// Per-point driver that applies a policy and removes outliers.
///
/// A point is retained when its best weight is at least `threshold`; the
/// boundary itself is retained. Under `best_only` a retained point yields
/// exactly one record, under its highest-weight cluster. Otherwise it yields
/// one record per cluster whose weight exceeds `threshold`, and always one for
/// its best cluster.
///
/// Classification never mutates the point, the models, or the policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    threshold: Probability,
    best_only: bool,
}

impl Engine {
    pub fn new(threshold: Probability, best_only: bool) -> Result<Self> {
        if (0. ..=1.).contains(&threshold) {
            Ok(Self {
                threshold,
                best_only,
            })
        } else {
            Err(ClusterError::invalid("outlier threshold", threshold, "within [0, 1]"))
        }
    }
    pub fn threshold(&self) -> Probability {
        self.threshold
    }
    pub fn best_only(&self) -> bool {
        self.best_only
    }

    pub fn classify<P>(&self, point: &Point, models: &[Cluster], policy: &P) -> Result<Outcome>
    where
        P: Policy + ?Sized,
    {
        let probabilities = policy.classify(point, models)?;
        let weights = policy.select(probabilities);
        if weights.len() != models.len() {
            return Err(ClusterError::WeightLength {
                expected: models.len(),
                actual: weights.len(),
            });
        }
        let (best, max) = crate::argmax(&weights).ok_or(ClusterError::EmptyModels)?;
        if max < self.threshold {
            log::debug!("discarding {} (best weight {:.6})", point, max);
            return Ok(Outcome::Discarded { best: max });
        }
        let records = models
            .iter()
            .zip(weights.iter())
            .enumerate()
            .filter(|(i, _)| !self.best_only || *i == best)
            .filter(|(i, (_, w))| *i == best || **w > self.threshold)
            .map(|(_, (model, w))| Classified::new(model.id(), *w, point.clone()))
            .collect::<Vec<_>>();
        Ok(Outcome::Retained(records))
    }

    /// classify points one at a time, in order
    pub fn run<I, P>(&self, points: I, models: &[Cluster], policy: &P) -> Result<(Vec<Classified>, Tally)>
    where
        I: IntoIterator<Item = Point>,
        P: Policy + ?Sized,
    {
        let mut records = Vec::new();
        let mut tally = Tally::default();
        for ref point in points {
            let outcome = self.classify(point, models, policy)?;
            tally.witness(&outcome);
            records.extend(Vec::from(outcome));
        }
        log::info!("{:<32}{}", "classified sequentially", tally);
        Ok((records, tally))
    }

    /// classify points across the rayon pool. records keep point order;
    /// each worker folds its own tally and the partials are reduced.
    pub fn par_run<P>(&self, points: &[Point], models: &[Cluster], policy: &P) -> Result<(Vec<Classified>, Tally)>
    where
        P: Policy + ?Sized,
    {
        let (records, tally) = points
            .par_iter()
            .map(|point| self.classify(point, models, policy))
            .try_fold(
                || (Vec::new(), Tally::default()),
                |(mut records, mut tally), outcome| {
                    let outcome = outcome?;
                    tally.witness(&outcome);
                    records.extend(Vec::from(outcome));
                    Ok::<_, ClusterError>((records, tally))
                },
            )
            .try_reduce(
                || (Vec::new(), Tally::default()),
                |(mut a, x), (b, y)| {
                    a.extend(b);
                    Ok((a, x.merge(y)))
                },
            )?;
        log::info!("{:<32}{}", "classified in parallel", tally);
        Ok((records, tally))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            threshold: OUTLIER_THRESHOLD,
            best_only: BEST_ONLY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::Canopy;
    use crate::ClusterId;
    use crate::FuzzyKMeans;
    use crate::Manhattan;
    use crate::Partition;
    use std::sync::Arc;

    /// fixed weights regardless of the point
    struct Fixed(Vec<Probability>);
    impl Policy for Fixed {
        fn select(&self, probabilities: Vec<Probability>) -> Vec<Probability> {
            probabilities
        }
        fn classify(&self, _: &Point, models: &[Cluster]) -> Result<Vec<Probability>> {
            match models.is_empty() {
                true => Err(ClusterError::EmptyModels),
                false => Ok(self.0.clone()),
            }
        }
        fn update(&mut self, _: &[Cluster]) {}
    }

    fn models(n: usize) -> Vec<Cluster> {
        (0..n)
            .map(|i| i as f64 * 10.)
            .map(|x| Point::from([x, x]))
            .enumerate()
            .map(|(i, c)| Cluster::new(i as ClusterId, c, Arc::new(Manhattan)))
            .collect()
    }

    /// the nine reference points clustered into three groups
    fn reference() -> Vec<Point> {
        [[1., 1.], [2., 1.], [1., 2.], [4., 4.], [5., 4.], [4., 5.], [5., 5.], [9., 9.], [8., 8.]]
            .into_iter()
            .map(Point::from)
            .collect()
    }
    fn reference_models() -> Vec<Cluster> {
        [[1.333, 1.333], [4.5, 4.5], [8.5, 8.5]]
            .into_iter()
            .enumerate()
            .map(|(i, c)| Cluster::new(i as ClusterId, Point::from(c), Arc::new(Manhattan)))
            .collect()
    }

    #[test]
    fn rejects_threshold_outside_unit_interval() {
        for t in [-0.01, 1.01, f64::NAN] {
            assert!(matches!(
                Engine::new(t, true),
                Err(ClusterError::InvalidParameter { .. })
            ));
        }
        assert!(Engine::new(0., false).is_ok());
        assert!(Engine::new(1., true).is_ok());
    }
    #[test]
    fn discards_below_threshold() {
        let engine = Engine::new(0.73, true).unwrap();
        let policy = Fixed(vec![0.70, 0.20, 0.10]);
        let outcome = engine.classify(&Point::from([1., 1.]), &models(3), &policy).unwrap();
        assert_eq!(outcome, Outcome::Discarded { best: 0.70 });
        assert!(outcome.records().is_empty());
    }
    #[test]
    fn zero_threshold_keeps_best() {
        let engine = Engine::new(0.0, true).unwrap();
        let policy = Fixed(vec![0.70, 0.20, 0.10]);
        let ref point = Point::from([1., 1.]);
        let outcome = engine.classify(point, &models(3), &policy).unwrap();
        assert_eq!(outcome.records(), &[Classified::new(0, 0.70, point.clone())]);
    }
    #[test]
    fn boundary_weight_is_retained() {
        let engine = Engine::new(0.5, true).unwrap();
        let outcome = engine
            .classify(&Point::from([1., 1.]), &models(2), &Fixed(vec![0.5, 0.5]))
            .unwrap();
        assert_eq!(outcome.records().len(), 1);
        assert_eq!(outcome.records()[0].cluster(), 0);
    }
    #[test]
    fn just_below_boundary_is_discarded() {
        let t = 0.5f64;
        let below = f64::from_bits(t.to_bits() - 1);
        let engine = Engine::new(t, true).unwrap();
        let outcome = engine
            .classify(&Point::from([1., 1.]), &models(2), &Fixed(vec![below, 0.25]))
            .unwrap();
        assert!(outcome.is_discarded());
    }
    #[test]
    fn soft_output_emits_everything_above_threshold() {
        let engine = Engine::new(0.15, false).unwrap();
        let outcome = engine
            .classify(&Point::from([1., 1.]), &models(3), &Fixed(vec![0.2, 0.7, 0.1]))
            .unwrap();
        let emitted = outcome
            .records()
            .iter()
            .map(|r| (r.cluster(), r.weight()))
            .collect::<Vec<_>>();
        assert_eq!(emitted, vec![(0, 0.2), (1, 0.7)]);
    }
    #[test]
    fn soft_output_keeps_best_at_boundary() {
        let engine = Engine::new(0.5, false).unwrap();
        let outcome = engine
            .classify(&Point::from([1., 1.]), &models(2), &Fixed(vec![0.5, 0.5]))
            .unwrap();
        assert_eq!(outcome.records().len(), 1);
        assert_eq!(outcome.records()[0].cluster(), 0);
    }
    #[test]
    fn soft_output_skips_zero_weights() {
        let engine = Engine::new(0., false).unwrap();
        let outcome = engine
            .classify(&Point::from([10., 10.]), &models(3), &FuzzyKMeans::default())
            .unwrap();
        assert_eq!(outcome.records().len(), 1);
        assert_eq!(outcome.records()[0].cluster(), 1);
        assert_eq!(outcome.records()[0].weight(), 1.);
    }
    #[test]
    fn mis_sized_weights_are_an_error() {
        let engine = Engine::default();
        for weights in [vec![1.], vec![0.2, 0.3, 0.5]] {
            let result = engine.classify(&Point::from([1., 1.]), &models(2), &Fixed(weights));
            assert!(matches!(
                result,
                Err(ClusterError::WeightLength { expected: 2, .. })
            ));
        }
    }
    #[test]
    fn mis_sized_weights_fail_the_parallel_run() {
        let engine = Engine::default();
        let points = (0..64).map(|_| Point::from([1., 1.])).collect::<Vec<_>>();
        let result = engine.par_run(&points, &models(2), &Fixed(vec![1.]));
        assert!(matches!(result, Err(ClusterError::WeightLength { actual: 1, .. })));
    }
    #[test]
    fn mismatched_point_is_an_error_not_a_record() {
        let engine = Engine::default();
        let result = engine.classify(&Point::from([9., 9., 500.]), &models(2), &FuzzyKMeans::default());
        assert!(matches!(result, Err(ClusterError::DimensionMismatch { .. })));
    }
    #[test]
    fn default_matches_constants() {
        let engine = Engine::default();
        assert_eq!(engine.threshold(), OUTLIER_THRESHOLD);
        assert_eq!(engine.best_only(), BEST_ONLY);
    }
    #[test]
    fn errors_propagate() {
        let engine = Engine::default();
        let result = engine.classify(&Point::from([1., 1.]), &[], &FuzzyKMeans::default());
        assert!(matches!(result, Err(ClusterError::EmptyModels)));
    }
    #[test]
    fn manhattan_grid_scenario() {
        let engine = Engine::default();
        let ref point = Point::from([1., 1.]);
        let outcome = engine.classify(point, &models(3), &FuzzyKMeans::default()).unwrap();
        assert_eq!(outcome.records().len(), 1);
        assert_eq!(outcome.records()[0].cluster(), 0);
        assert!(outcome.records()[0].weight() > 0.8);
        assert_eq!(outcome.records()[0].point(), point);
    }
    #[test]
    fn reference_points_without_outlier_removal() {
        let engine = Engine::new(0., true).unwrap();
        let (records, tally) = engine
            .run(reference(), &reference_models(), &Canopy::default())
            .unwrap();
        let partition = Partition::from(records);
        assert_eq!(tally.discarded(), 0);
        assert_eq!(partition.get(0).len(), 3);
        assert_eq!(partition.get(1).len(), 4);
        assert_eq!(partition.get(2).len(), 2);
    }
    #[test]
    fn reference_points_with_outlier_removal() {
        let engine = Engine::new(0.73, true).unwrap();
        let ref midpoint = Point::from([3., 3.]);
        let points = reference().into_iter().chain(std::iter::once(midpoint.clone()));
        let (records, tally) = engine
            .run(points, &reference_models(), &FuzzyKMeans::default())
            .unwrap();
        let partition = Partition::from(records);
        assert_eq!(tally.seen(), 10);
        assert_eq!(tally.discarded(), 1);
        assert_eq!(partition.get(0).len(), 3);
        assert_eq!(partition.get(1).len(), 4);
        assert_eq!(partition.get(2).len(), 2);
        assert!(partition.ids().all(|&id| partition.get(id).iter().all(|r| r.point() != midpoint)));
    }
    #[test]
    fn parallel_matches_sequential() {
        let engine = Engine::new(0.4, false).unwrap();
        let models = (0..5)
            .map(|i| Cluster::new(i, Point::random(), Arc::new(Manhattan)))
            .collect::<Vec<_>>();
        let points = (0..512).map(|_| Point::random()).collect::<Vec<_>>();
        let policy = FuzzyKMeans::default();
        let sequential = engine.run(points.clone(), &models, &policy).unwrap();
        let parallel = engine.par_run(&points, &models, &policy).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.1.seen(), 512);
    }
    #[test]
    fn parallel_fails_on_first_error() {
        let engine = Engine::default();
        let points = (0..64).map(|_| Point::random()).collect::<Vec<_>>();
        assert!(engine.par_run(&points, &[], &FuzzyKMeans::default()).is_err());
    }
}
