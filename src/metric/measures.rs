use super::*;
use crate::Energy;
use crate::Point;
use std::sync::Arc;

/// sum of absolute component differences
#[derive(Debug, Default, Clone, Copy)]
pub struct Manhattan;

/// square root of summed squared differences
#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

/// summed squared differences, no square root
#[derive(Debug, Default, Clone, Copy)]
pub struct SquaredEuclidean;

/// largest absolute component difference
#[derive(Debug, Default, Clone, Copy)]
pub struct Chebyshev;

/// one minus the cosine of the angle between the two points
#[derive(Debug, Default, Clone, Copy)]
pub struct Cosine;

impl Measure for Manhattan {
    fn distance(&self, x: &Point, y: &Point) -> Energy {
        x.zip(y).map(|(a, b)| (a - b).abs()).sum()
    }
    fn name(&self) -> &'static str {
        "manhattan"
    }
}

impl Measure for Euclidean {
    fn distance(&self, x: &Point, y: &Point) -> Energy {
        SquaredEuclidean.distance(x, y).sqrt()
    }
    fn name(&self) -> &'static str {
        "euclidean"
    }
}

impl Measure for SquaredEuclidean {
    fn distance(&self, x: &Point, y: &Point) -> Energy {
        x.zip(y).map(|(a, b)| (a - b) * (a - b)).sum()
    }
    fn name(&self) -> &'static str {
        "squared-euclidean"
    }
}

impl Measure for Chebyshev {
    fn distance(&self, x: &Point, y: &Point) -> Energy {
        x.zip(y).map(|(a, b)| (a - b).abs()).fold(0., Energy::max)
    }
    fn name(&self) -> &'static str {
        "chebyshev"
    }
}

impl Measure for Cosine {
    /// two zero vectors are identical; one zero vector is orthogonal to anything.
    /// clamped at zero since rounding can push parallel vectors slightly below.
    fn distance(&self, x: &Point, y: &Point) -> Energy {
        let dot = x.zip(y).map(|(a, b)| a * b).sum::<Energy>();
        let xx = x.iter().map(|a| a * a).sum::<Energy>().sqrt();
        let yy = y.iter().map(|b| b * b).sum::<Energy>().sqrt();
        match (xx == 0., yy == 0.) {
            (true, true) => 0.,
            (true, false) | (false, true) => 1.,
            (false, false) => (1. - dot / (xx * yy)).max(0.),
        }
    }
    fn name(&self) -> &'static str {
        "cosine"
    }
}

/// look up a measure by the name it reports
pub fn measure(name: &str) -> anyhow::Result<Arc<dyn Measure>> {
    match name.trim().to_lowercase().as_str() {
        "manhattan" => Ok(Arc::new(Manhattan)),
        "euclidean" => Ok(Arc::new(Euclidean)),
        "squared-euclidean" => Ok(Arc::new(SquaredEuclidean)),
        "chebyshev" => Ok(Arc::new(Chebyshev)),
        "cosine" => Ok(Arc::new(Cosine)),
        other => Err(anyhow::anyhow!("unknown distance measure: {}", other)),
    }
}
