//! Standard Z/2 reduction of the filtration boundary matrix.
//!
//! Columns are sorted index vectors; `low` is the last entry and column
//! addition is a merge-based symmetric difference. A column that ends
//! non-zero pairs its `low` (birth) with itself (death) and is stored as the
//! death simplex's chain.
//!
//! Edge columns also carry their V column: the set of edges whose boundaries
//! were summed into them. An edge column that reduces to zero has a V column
//! that is a 1-cycle containing the edge. If that class never dies the V
//! column is kept as its representative.

use super::PersistencePairing;
use crate::complex::Filtration;
use crate::error::ComputeError;
use std::collections::HashMap;

/// Sparse Z/2 column, strictly increasing row indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Column(Vec<usize>);

impl Column {
    #[inline]
    fn low(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// `self += other` over Z/2.
    fn add_assign(&mut self, other: &Column) {
        let (a, b) = (&self.0, &other.0);
        let mut out = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => {
                    out.push(a[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    out.push(b[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        out.extend_from_slice(&a[i..]);
        out.extend_from_slice(&b[j..]);
        self.0 = out;
    }
}

/// Reduce the boundary matrix of `filtration`.
///
/// Fails with `NotAComplex` if some face is missing or enters after its coface.
pub fn reduce(filtration: &Filtration) -> Result<PersistencePairing, ComputeError> {
    let m = filtration.len();
    let index = filtration.index_map();
    let mut partner: Vec<Option<usize>> = vec![None; m];
    let mut chains: HashMap<usize, Vec<usize>> = HashMap::new();
    // pivot[r] = column whose reduced low is r.
    let mut pivot: Vec<Option<usize>> = vec![None; m];
    let mut reduced: Vec<Column> = Vec::with_capacity(m);
    // V columns, non-empty for edges only.
    let mut basis: Vec<Column> = Vec::with_capacity(m);
    let mut cycles: HashMap<usize, Vec<usize>> = HashMap::new();

    for (j, simplex) in filtration.iter().enumerate() {
        let mut rows = Vec::with_capacity(simplex.len());
        for face in simplex.faces() {
            match index.get(face.as_slice()) {
                Some(&r) if r < j => rows.push(r),
                _ => return Err(ComputeError::NotAComplex { simplex: j }),
            }
        }
        rows.sort_unstable();
        let mut col = Column(rows);
        let mut v = if simplex.is_edge() {
            Column(vec![j])
        } else {
            Column::default()
        };

        while let Some(low) = col.low() {
            match pivot[low] {
                Some(k) => {
                    col.add_assign(&reduced[k]);
                    if simplex.is_edge() {
                        v.add_assign(&basis[k]);
                    }
                }
                None => break,
            }
        }

        if let Some(low) = col.low() {
            pivot[low] = Some(j);
            partner[low] = Some(j);
            partner[j] = Some(low);
            chains.insert(j, col.0.clone());
        } else if simplex.is_edge() {
            // Zero columns are never added to later ones.
            cycles.insert(j, std::mem::take(&mut v.0));
        }
        reduced.push(col);
        basis.push(v);
    }

    // Classes that die are represented by their death chain.
    cycles.retain(|&birth, _| partner[birth].is_none());
    Ok(PersistencePairing {
        partner,
        chains,
        cycles,
    })
}
