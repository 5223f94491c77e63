//! Pairing → diagrams.

use super::{DiagramPoint, Diagrams, PairHandle, PersistencePairing};
use crate::complex::Filtration;
use crate::error::ComputeError;

/// Diagram points for dimensions `0..=max_dim`, each in birth-simplex order.
///
/// Pairs with `death == birth` carry no persistence and are skipped.
/// Unpaired classes get `death = +inf`.
pub fn diagrams(
    pairing: &PersistencePairing,
    filtration: &Filtration,
    max_dim: usize,
) -> Result<Diagrams, ComputeError> {
    if pairing.len() != filtration.len() {
        return Err(ComputeError::Mismatch {
            pairing: pairing.len(),
            filtration: filtration.len(),
        });
    }
    let mut dims: Vec<Vec<DiagramPoint>> = vec![Vec::new(); max_dim + 1];
    for (i, simplex) in filtration.iter().enumerate() {
        let dim = simplex.dim();
        if dim > max_dim || !pairing.is_birth(i) {
            continue;
        }
        let death = match pairing.pair(i) {
            Some(j) => filtration[j].value,
            None => f64::INFINITY,
        };
        if death > simplex.value {
            dims[dim].push(DiagramPoint {
                birth: simplex.value,
                death,
                dim,
                handle: PairHandle(i),
            });
        }
    }
    Ok(Diagrams { dims })
}
