//! Pairing and diagram types.

use std::collections::HashMap;

/// Opaque link from a diagram point back into the pairing: the filtration
/// index of the birth simplex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairHandle(pub usize);

/// Result of the boundary-matrix reduction.
///
/// `partner[i]` is the simplex paired with `i` (in either direction);
/// `chains[d]` is the reduced boundary column of death simplex `d`, as
/// ascending filtration indices. `cycles[b]` is a 1-cycle through the
/// unpaired edge `b`, same layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersistencePairing {
    pub(crate) partner: Vec<Option<usize>>,
    pub(crate) chains: HashMap<usize, Vec<usize>>,
    pub(crate) cycles: HashMap<usize, Vec<usize>>,
}

impl PersistencePairing {
    /// Assemble a pairing computed elsewhere. `partner` must be symmetric.
    pub fn from_parts(partner: Vec<Option<usize>>, chains: HashMap<usize, Vec<usize>>) -> Self {
        debug_assert!(partner
            .iter()
            .enumerate()
            .all(|(i, p)| p.map_or(true, |j| partner.get(j) == Some(&Some(i)))));
        Self {
            partner,
            chains,
            cycles: HashMap::new(),
        }
    }

    /// Attach representative cycles of essential classes, keyed by birth simplex.
    pub fn with_cycles(mut self, cycles: HashMap<usize, Vec<usize>>) -> Self {
        debug_assert!(cycles.keys().all(|&b| self.pair(b).is_none()));
        self.cycles = cycles;
        self
    }

    /// Number of simplices covered (equals the filtration length).
    #[inline]
    pub fn len(&self) -> usize {
        self.partner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.partner.is_empty()
    }

    /// Partner of simplex `i`, `None` if unpaired or out of range.
    #[inline]
    pub fn pair(&self, i: usize) -> Option<usize> {
        self.partner.get(i).copied().flatten()
    }

    /// `i` creates a class (its reduced column is zero).
    #[inline]
    pub fn is_birth(&self, i: usize) -> bool {
        match self.pair(i) {
            Some(j) => j > i,
            None => i < self.partner.len(),
        }
    }

    /// Reduced boundary chain recorded when `death` was added.
    #[inline]
    pub fn chain(&self, death: usize) -> Option<&[usize]> {
        self.chains.get(&death).map(Vec::as_slice)
    }

    /// Cycle recorded for the essential class born at `birth`.
    #[inline]
    pub fn cycle(&self, birth: usize) -> Option<&[usize]> {
        self.cycles.get(&birth).map(Vec::as_slice)
    }

    /// `(birth, death)` filtration-index pairs in birth order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partner
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.filter(|&j| j > i).map(|j| (i, j)))
    }

    /// Unpaired (essential) simplices.
    pub fn unpaired(&self) -> impl Iterator<Item = usize> + '_ {
        self.partner
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_none())
            .map(|(i, _)| i)
    }
}

/// One point of a persistence diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramPoint {
    pub birth: f64,
    /// `f64::INFINITY` for essential classes.
    pub death: f64,
    pub dim: usize,
    pub handle: PairHandle,
}

impl DiagramPoint {
    #[inline]
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }

    #[inline]
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }
}

/// Diagram points per homological dimension.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagrams {
    pub(crate) dims: Vec<Vec<DiagramPoint>>,
}

impl Diagrams {
    pub fn from_dims(dims: Vec<Vec<DiagramPoint>>) -> Self {
        Self { dims }
    }

    /// Points of dimension `d`; empty if that dimension was not computed.
    #[inline]
    pub fn dim(&self, d: usize) -> &[DiagramPoint] {
        self.dims.get(d).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of dimensions reported.
    #[inline]
    pub fn num_dims(&self) -> usize {
        self.dims.len()
    }
}
