//! Simplicial complexes and filtrations.
//!
//! Purpose
//! - `Simplex`/`Filtration`: the read-only data model every later stage consumes.
//!   A filtration is sorted by (value, dimension, vertices) so ties always have
//!   one fixed order and the whole pipeline is deterministic.
//! - `rips`: truncated Vietoris–Rips filtration of a 3D cloud, built from
//!   neighbour lists rather than all triples.
//!
//! Code cross-refs: `persistence::reduce`, `cycle::extract`.

mod rips;
mod types;

pub use rips::{rips_filtration, RipsCfg};
pub use types::{Filtration, Simplex};
