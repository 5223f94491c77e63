//! Error taxonomy.
//!
//! - `ComputeError`: the persistence computer refused or failed.
//! - `RankError`: a dimension-1 point has no defined death/birth ratio.
//! - `CycleError`: the selection does not address a diagram point.
//! - `SessionError`: transition/query failures; wraps the above at the
//!   `ensure_computed` boundary.

use thiserror::Error;

/// Failures raised by a `PersistenceComputer`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputeError {
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },
    #[error("invalid computer config: {reason}")]
    InvalidConfig { reason: String },
    #[error("filtration exceeds {limit} simplices")]
    TooManySimplices { limit: usize },
    #[error("simplex {simplex} has a face that is missing or enters later")]
    NotAComplex { simplex: usize },
    #[error("pairing does not match filtration ({pairing} vs {filtration} simplices)")]
    Mismatch { pairing: usize, filtration: usize },
}

impl ComputeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Ranking failure: the ratio `death / birth` is undefined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    #[error("diagram point {index} has non-positive birth {birth}; death/birth ratio is undefined")]
    UndefinedRatio { index: usize, birth: f64 },
}

/// Selection does not address an existing diagram point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error("selection {index} out of range ({len} diagram points)")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("point count {n} outside [{min}, {max}]")]
    InvalidPointCount { n: usize, min: usize, max: usize },
    #[error("no point cloud generated yet")]
    NoPointCloud,
    #[error("persistence not computed")]
    NotComputed,
    #[error("persistence computation failed: {0}")]
    ComputationFailure(#[from] ComputeError),
    #[error(transparent)]
    Rank(#[from] RankError),
    #[error(transparent)]
    Cycle(#[from] CycleError),
}
