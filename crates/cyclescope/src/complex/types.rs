//! Simplex and filtration types.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::Index;

/// Simplex given by sorted vertex ids plus the value at which it enters.
#[derive(Clone, Debug, PartialEq)]
pub struct Simplex {
    pub vertices: Vec<usize>,
    pub value: f64,
}

impl Simplex {
    /// Builds a simplex; vertex ids are sorted and must be distinct.
    pub fn new(mut vertices: Vec<usize>, value: f64) -> Self {
        vertices.sort_unstable();
        debug_assert!(vertices.windows(2).all(|w| w[0] < w[1]));
        Self { vertices, value }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn is_edge(&self) -> bool {
        self.vertices.len() == 2
    }

    /// Codimension-1 faces, each with one vertex removed.
    pub fn faces(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        let k = if self.vertices.len() > 1 {
            self.vertices.len()
        } else {
            0
        };
        (0..k).map(move |skip| {
            self.vertices
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &v)| v)
                .collect()
        })
    }

    /// Filtration order: value, then dimension, then lexicographic vertices.
    fn filtration_cmp(&self, other: &Self) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then(self.vertices.len().cmp(&other.vertices.len()))
            .then_with(|| self.vertices.cmp(&other.vertices))
    }
}

/// Simplices in filtration order. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filtration {
    simplices: Vec<Simplex>,
}

impl Filtration {
    /// Sorts into filtration order. Faces enter no later than their cofaces as
    /// long as every face's value is `<=` the coface value.
    pub fn from_simplices(mut simplices: Vec<Simplex>) -> Self {
        simplices.sort_by(Simplex::filtration_cmp);
        Self { simplices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Simplex> {
        self.simplices.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Simplex> {
        self.simplices.iter()
    }

    pub fn as_slice(&self) -> &[Simplex] {
        &self.simplices
    }

    /// Lookup from vertex set to filtration index.
    pub fn index_map(&self) -> HashMap<&[usize], usize> {
        self.simplices
            .iter()
            .enumerate()
            .map(|(i, s)| (s.vertices.as_slice(), i))
            .collect()
    }

    /// Largest simplex dimension present, `None` when empty.
    pub fn max_dim(&self) -> Option<usize> {
        self.simplices.iter().map(Simplex::dim).max()
    }
}

impl Index<usize> for Filtration {
    type Output = Simplex;
    #[inline]
    fn index(&self, i: usize) -> &Simplex {
        &self.simplices[i]
    }
}

impl<'a> IntoIterator for &'a Filtration {
    type Item = &'a Simplex;
    type IntoIter = std::slice::Iter<'a, Simplex>;
    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}
