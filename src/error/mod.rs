use crate::Energy;

/// Errors surfaced by classification and policy state persistence.
///
/// Every variant is local and synchronous. The caller decides whether to
/// skip the point, abort the run, or log and continue. Discarding a point
/// as an outlier is an outcome, not an error, and never appears here.
#[derive(Debug)]
pub enum ClusterError {
    /// A tunable was outside its domain at construction or decode time.
    InvalidParameter { name: &'static str, value: f64, expected: &'static str },
    /// A distance measure returned a negative, NaN, or infinite value.
    DistanceViolation { index: usize, value: Energy },
    /// A point and a model center disagree on dimensionality.
    DimensionMismatch { index: usize, expected: usize, actual: usize },
    /// A policy returned a weight vector not indexed like the models.
    WeightLength { expected: usize, actual: usize },
    /// Classification was attempted against zero models.
    EmptyModels,
    /// Persisted policy state did not match the expected layout.
    Deserialize(String),
    /// Underlying stream failure while writing or reading state.
    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClusterError>;

impl ClusterError {
    pub fn invalid(name: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            expected,
        }
    }
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                expected,
            } => write!(f, "invalid parameter {} = {}: expected {}", name, value, expected),
            Self::DistanceViolation { index, value } => write!(
                f,
                "distance measure of model {} returned {}: expected a finite non-negative value",
                index, value
            ),
            Self::DimensionMismatch {
                index,
                expected,
                actual,
            } => write!(
                f,
                "point has dimension {} but center of model {} has dimension {}",
                actual, index, expected
            ),
            Self::WeightLength { expected, actual } => write!(
                f,
                "policy returned {} weights for {} models",
                actual, expected
            ),
            Self::EmptyModels => write!(f, "cannot classify against an empty model list"),
            Self::Deserialize(s) => write!(f, "malformed policy state: {}", s),
            Self::Io(e) => write!(f, "policy state i/o: {}", e),
        }
    }
}

impl std::error::Error for ClusterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// short reads mean the stream ended before the layout did
impl From<std::io::Error> for ClusterError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::Deserialize(e.to_string()),
            _ => Self::Io(e),
        }
    }
}
