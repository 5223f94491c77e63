//! Representative 1-cycles of diagram points.
//!
//! A finite dimension-1 point is paired with the triangle that kills it; the
//! reduced boundary of that triangle is a loop of edges whose youngest edge is
//! the birth simplex. An essential point has no killer; its cycle is the one
//! recorded when its birth edge reduced to zero. We hand those edges to the
//! view as point pairs.

use crate::complex::Filtration;
use crate::error::CycleError;
use crate::persistence::{DiagramPoint, PairHandle, PersistencePairing};
use crate::Point;

/// Undirected segment between two cloud points.
pub type Edge = (Point, Point);

/// Edges of a representative cycle plus the lifespan of its class.
#[derive(Clone, Debug, PartialEq)]
pub struct CycleSelection {
    /// Index into the dimension-1 diagram.
    pub index: usize,
    pub edges: Vec<Edge>,
    pub birth: f64,
    pub death: f64,
}

impl CycleSelection {
    /// `death / birth` as displayed next to the selection; `None` for zero birth.
    pub fn ratio(&self) -> Option<f64> {
        (self.birth > 0.0).then(|| self.death / self.birth)
    }
}

/// Resolve diagram point `selected` to its representative cycle.
///
/// Pure. A point with no recorded chain or cycle yields an empty edge list;
/// only an index outside the diagram is an error.
pub fn extract(
    pairing: &PersistencePairing,
    filtration: &Filtration,
    diagram: &[DiagramPoint],
    points: &[Point],
    selected: usize,
) -> Result<CycleSelection, CycleError> {
    let pt = diagram.get(selected).ok_or(CycleError::OutOfRange {
        index: selected,
        len: diagram.len(),
    })?;
    let PairHandle(birth) = pt.handle;
    let chain = match pairing.pair(birth) {
        Some(death) if death > birth => pairing.chain(death),
        Some(_) => None,
        None => pairing.cycle(birth),
    }
    .unwrap_or(&[]);
    let edges = chain
        .iter()
        .filter_map(|&s| filtration.get(s))
        .filter(|s| s.is_edge())
        .filter_map(|s| Some((*points.get(s.vertices[0])?, *points.get(s.vertices[1])?)))
        .collect();
    Ok(CycleSelection {
        index: selected,
        edges,
        birth: pt.birth,
        death: pt.death,
    })
}
