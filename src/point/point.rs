use crate::Arbitrary;
use crate::ClusterError;
use crate::Result;
use serde::Deserialize;
use serde::Serialize;

/// A numeric vector over a fixed dimensionality.
///
/// Storage is always dense. Sparse input is accepted through
/// [`Point::sparse`] and expanded, since the classification core only
/// ever reads the numeric components. Points compared against each other
/// must share a dimension; [`crate::distances`] enforces this before any
/// measure runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Point(Vec<f64>);

impl Point {
    /// build from (index, value) pairs. unlisted indices are zero.
    /// fails if any index falls outside `dim`.
    pub fn sparse<I>(dim: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut values = vec![0.; dim];
        for (i, x) in entries {
            match values.get_mut(i) {
                Some(v) => *v = x,
                None => return Err(ClusterError::invalid("sparse index", i as f64, "< dimension")),
            }
        }
        Ok(Self(values))
    }
    pub fn zeroes(dim: usize) -> Self {
        Self(vec![0.; dim])
    }
    pub fn dim(&self) -> usize {
        self.0.len()
    }
    pub fn values(&self) -> &[f64] {
        &self.0
    }
    pub fn get(&self, i: usize) -> f64 {
        self.0.get(i).copied().unwrap_or(0.)
    }
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }
    /// pairs of components. callers check dimensions first;
    /// a shorter side reads as zeroes past its end.
    pub fn zip<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = (f64, f64)> + 'a {
        (0..self.dim().max(other.dim())).map(move |i| (self.get(i), other.get(i)))
    }
    /// indices of non-zero components
    pub fn nonzero(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, x)| **x != 0.)
            .map(|(i, _)| i)
    }
}

impl From<Vec<f64>> for Point {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
impl From<&[f64]> for Point {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}
impl<const N: usize> From<[f64; N]> for Point {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}
impl From<Point> for Vec<f64> {
    fn from(point: Point) -> Self {
        point.0
    }
}

/// parse "1,2,3" or "1 2 3"
impl TryFrom<&str> for Point {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<f64>().map_err(|e| anyhow::anyhow!("{}: {:?}", e, t)))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if values.is_empty() {
            return Err(anyhow::anyhow!("empty point"));
        }
        Ok(Self(values))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ref parts = self.0.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        write!(f, "{}", parts.join(","))
    }
}

impl Arbitrary for Point {
    fn random() -> Self {
        const D: usize = 4;
        (0..D)
            .map(|_| rand::random_range(-10f64..10f64))
            .collect::<Vec<_>>()
            .into()
    }
}
