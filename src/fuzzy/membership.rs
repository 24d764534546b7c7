use crate::ClusterError;
use crate::Energy;
use crate::FUZZINESS;
use crate::Probability;
use crate::Result;

/// Fuzzy-c-means membership over a slice of point-to-center distances.
///
/// For distances `d` and fuzzifier `m`, the membership of model `i` is
///
/// ```text
/// p_i = 1 / Σ_j (d_i / d_j) ^ (2 / (m - 1))
/// ```
///
/// so a model's share shrinks as its distance grows relative to every other
/// model. The `j == i` term is always 1, which keeps the denominator at least
/// 1 and the result finite even when ratios overflow.
///
/// A zero distance means the point sits on a center. That model takes all of
/// the mass (the first such model if several coincide) and the formula is
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Membership {
    m: f64,
}

impl Membership {
    pub fn new(m: f64) -> Result<Self> {
        if m.is_finite() && m > 1. {
            Ok(Self { m })
        } else {
            Err(ClusterError::invalid("m", m, "finite and > 1"))
        }
    }
    pub fn m(&self) -> f64 {
        self.m
    }
    /// 2 / (m - 1)
    pub fn exponent(&self) -> f64 {
        2. / (self.m - 1.)
    }

    pub fn compute(&self, distances: &[Energy]) -> Result<Vec<Probability>> {
        if distances.is_empty() {
            return Err(ClusterError::EmptyModels);
        }
        for (index, &value) in distances.iter().enumerate() {
            crate::validate(index, value)?;
        }
        match distances.iter().position(|&d| d == 0.) {
            Some(k) => Ok(Self::coincident(k, distances.len())),
            None => Ok(distances
                .iter()
                .map(|&di| self.share(di, distances))
                .collect()),
        }
    }

    fn share(&self, di: Energy, distances: &[Energy]) -> Probability {
        let ref e = self.exponent();
        1. / distances
            .iter()
            .map(|&dj| (di / dj).powf(*e))
            .sum::<Probability>()
    }

    fn coincident(k: usize, n: usize) -> Vec<Probability> {
        (0..n).map(|i| if i == k { 1. } else { 0. }).collect()
    }
}

impl Default for Membership {
    fn default() -> Self {
        Self { m: FUZZINESS }
    }
}
