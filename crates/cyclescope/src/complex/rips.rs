//! Truncated Vietoris–Rips filtration.
//!
//! A k-simplex enters at the largest pairwise distance among its vertices and
//! is kept only if that distance is `<= max_edge`. We build simplices up to
//! dimension `max_dim + 1` so that classes of dimension `max_dim` can die.
//!
//! Cliques are enumerated from upper neighbour lists (`j > i` within
//! `max_edge`), which keeps the cost proportional to local density instead of
//! `n^3`.

use super::{Filtration, Simplex};
use crate::cfg::{DEFAULT_MAX_EDGE, DEFAULT_MAX_SIMPLICES};
use crate::error::ComputeError;
use crate::Point;
use std::collections::HashMap;

/// Rips builder configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RipsCfg {
    /// Truncation radius; longer edges never enter.
    pub max_edge: f64,
    /// Highest homological dimension of interest (0, 1, or 2).
    pub max_dim: usize,
    /// Refuse to build filtrations larger than this.
    pub max_simplices: usize,
}

impl Default for RipsCfg {
    fn default() -> Self {
        Self {
            max_edge: DEFAULT_MAX_EDGE,
            max_dim: 1,
            max_simplices: DEFAULT_MAX_SIMPLICES,
        }
    }
}

impl RipsCfg {
    pub(crate) fn validate(&self) -> Result<(), ComputeError> {
        if !self.max_edge.is_finite() || self.max_edge <= 0.0 {
            return Err(ComputeError::invalid("max_edge must be finite and > 0"));
        }
        if self.max_dim > 2 {
            return Err(ComputeError::invalid("max_dim must be 0, 1, or 2"));
        }
        if self.max_simplices == 0 {
            return Err(ComputeError::invalid("max_simplices must be > 0"));
        }
        Ok(())
    }
}

/// Build the Rips filtration of `points`.
pub fn rips_filtration(points: &[Point], cfg: &RipsCfg) -> Result<Filtration, ComputeError> {
    cfg.validate()?;
    if let Some(index) = points
        .iter()
        .position(|p| !p.iter().all(|c| c.is_finite()))
    {
        return Err(ComputeError::NonFinitePoint { index });
    }

    let n = points.len();
    let limit = cfg.max_simplices;
    let mut out: Vec<Simplex> = Vec::with_capacity(n);
    let push = |out: &mut Vec<Simplex>, s: Simplex| -> Result<(), ComputeError> {
        if out.len() >= limit {
            return Err(ComputeError::TooManySimplices { limit });
        }
        out.push(s);
        Ok(())
    };

    for i in 0..n {
        push(&mut out, Simplex::new(vec![i], 0.0))?;
    }

    // upper[i]: neighbours j > i, ascending.
    let mut upper: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut length: HashMap<(usize, usize), f64> = HashMap::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let d = (points[i] - points[j]).norm();
            if d <= cfg.max_edge {
                upper[i].push(j);
                length.insert((i, j), d);
                push(&mut out, Simplex::new(vec![i, j], d))?;
            }
        }
    }
    let edge = |a: usize, b: usize| length.get(&(a.min(b), a.max(b))).copied();

    if cfg.max_dim >= 1 {
        for i in 0..n {
            let nb = &upper[i];
            for (a, &j) in nb.iter().enumerate() {
                for (b, &k) in nb.iter().enumerate().skip(a + 1) {
                    let Some(djk) = edge(j, k) else { continue };
                    let v = length[&(i, j)].max(length[&(i, k)]).max(djk);
                    push(&mut out, Simplex::new(vec![i, j, k], v))?;
                    if cfg.max_dim >= 2 {
                        for &l in &nb[b + 1..] {
                            let (Some(djl), Some(dkl)) = (edge(j, l), edge(k, l)) else {
                                continue;
                            };
                            let w = v.max(length[&(i, l)]).max(djl).max(dkl);
                            push(&mut out, Simplex::new(vec![i, j, k, l], w))?;
                        }
                    }
                }
            }
        }
    }

    Ok(Filtration::from_simplices(out))
}
