//! Persistent-homology session core: point clouds, filtrations, pairings,
//! ratio ranking, and representative 1-cycles.
//!
//! Layout
//! - `cloud`: random 3D point clouds with replay tokens.
//! - `complex`: simplices, filtrations, and the Rips filtration builder.
//! - `persistence`: Z/2 column reduction, diagrams, and the `PersistenceComputer` seam.
//! - `rank`, `cycle`: the two pure operations the viewer performs on top of a pairing.
//! - `session`: the explicit state machine a front end drives.
//! - `view`: the render collaborator and the render pass.
//!
//! API Policy
//! - Project-internal. The CLI crate is the only consumer; breaking changes are fine
//!   when they improve clarity.

pub mod cloud;
pub mod complex;
pub mod cycle;
pub mod error;
pub mod persistence;
pub mod rank;
pub mod session;
pub mod view;

mod cfg;

#[cfg(test)]
mod tests_scenarios;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector3 as Vec3;

/// A point of the cloud. Indices into the cloud are the vertex ids of every simplex.
pub type Point = Vec3<f64>;

/// Common exports for front ends.
pub mod prelude {
    pub use crate::cloud::{generate, CloudCfg, ReplayToken};
    pub use crate::complex::{Filtration, RipsCfg, Simplex};
    pub use crate::cycle::{extract, CycleSelection, Edge};
    pub use crate::error::{ComputeError, CycleError, RankError, SessionError};
    pub use crate::persistence::{
        DiagramPoint, Diagrams, PairHandle, PersistenceComputer, PersistencePairing,
        RipsPersistence,
    };
    pub use crate::rank::{rank, ratio};
    pub use crate::session::{Command, Computed, ControlSpec, Controls, Session, SessionCfg, State};
    pub use crate::view::{render_pass, View, NO_CYCLE_NOTICE};
    pub use crate::Point;
}
