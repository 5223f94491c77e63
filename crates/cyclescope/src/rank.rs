//! Death/birth ratio ranking of dimension-1 diagram points.
//!
//! The ratio is scale-free, so large loops in sparse regions and small loops in
//! dense regions compete on equal footing. Points with the largest ratio come
//! first; equal ratios keep their diagram order.

use crate::error::RankError;
use crate::persistence::DiagramPoint;

/// `death / birth`, or `None` when birth is not strictly positive (incl. NaN).
/// Essential points (infinite death) rank as `+inf`.
#[inline]
pub fn ratio(p: &DiagramPoint) -> Option<f64> {
    if p.birth > 0.0 {
        Some(p.death / p.birth)
    } else {
        None
    }
}

/// Diagram indices ordered by ratio, descending; stable for ties.
///
/// Fails on the first point whose ratio is undefined instead of dropping it,
/// so the output is always a permutation of `0..points.len()`.
pub fn rank(points: &[DiagramPoint]) -> Result<Vec<usize>, RankError> {
    let ratios = points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            ratio(p).ok_or(RankError::UndefinedRatio {
                index,
                birth: p.birth,
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    let mut order: Vec<usize> = (0..points.len()).collect();
    // `sort_by` is stable, so equal ratios stay in index order.
    order.sort_by(|&a, &b| ratios[b].total_cmp(&ratios[a]));
    Ok(order)
}
