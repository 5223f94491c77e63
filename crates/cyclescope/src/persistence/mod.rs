//! Persistent homology over Z/2: pairing, chains, and diagrams.
//!
//! Purpose
//! - `reduce`: the standard column algorithm on the boundary matrix of a
//!   filtration. Besides the birth/death pairing it keeps the reduced column of
//!   every death simplex; for a triangle that column is the 1-cycle that the
//!   triangle fills, i.e. the representative the viewer draws.
//! - `diagrams`: turns a pairing into per-dimension `(birth, death)` points,
//!   dropping zero-persistence pairs and reporting unpaired classes with
//!   infinite death.
//! - `PersistenceComputer`: the seam a front end depends on. `RipsPersistence`
//!   is the shipped implementation; any other library meeting the same
//!   contracts can be swapped in.
//!
//! References
//! - Edelsbrunner, Letscher, Zomorodian (2002), "Topological Persistence and
//!   Simplification".
//! - Code cross-refs: `complex::rips_filtration`, `cycle::extract`, `rank::rank`.

mod diagram;
mod reduce;
mod types;

pub use diagram::diagrams;
pub use reduce::reduce;
pub use types::{DiagramPoint, Diagrams, PairHandle, PersistencePairing};

use crate::complex::{rips_filtration, Filtration, RipsCfg};
use crate::error::ComputeError;
use crate::Point;

/// Complex construction plus persistence, as consumed by the session.
///
/// Contracts
/// - `compute_complex` is deterministic for identical points.
/// - `compute_persistence` returns a pairing indexed like the filtration.
/// - `compute_diagrams` returns one sequence per dimension it reports.
pub trait PersistenceComputer {
    fn compute_complex(&self, points: &[Point]) -> Result<Filtration, ComputeError>;

    fn compute_persistence(&self, filtration: &Filtration)
        -> Result<PersistencePairing, ComputeError>;

    fn compute_diagrams(
        &self,
        pairing: &PersistencePairing,
        filtration: &Filtration,
    ) -> Result<Diagrams, ComputeError>;
}

/// Rips filtration + standard reduction.
#[derive(Clone, Copy, Debug, Default)]
pub struct RipsPersistence {
    pub cfg: RipsCfg,
}

impl RipsPersistence {
    pub fn new(cfg: RipsCfg) -> Self {
        Self { cfg }
    }
}

impl PersistenceComputer for RipsPersistence {
    fn compute_complex(&self, points: &[Point]) -> Result<Filtration, ComputeError> {
        rips_filtration(points, &self.cfg)
    }

    fn compute_persistence(
        &self,
        filtration: &Filtration,
    ) -> Result<PersistencePairing, ComputeError> {
        reduce(filtration)
    }

    fn compute_diagrams(
        &self,
        pairing: &PersistencePairing,
        filtration: &Filtration,
    ) -> Result<Diagrams, ComputeError> {
        diagrams(pairing, filtration, self.cfg.max_dim)
    }
}
