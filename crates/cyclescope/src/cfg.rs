//! Fixed limits shared by the builders (internal).
//!
//! Policy
//! - Constants live here so call sites never juggle magic numbers; the tunable
//!   knobs are on the `Cfg` structs instead.

/// Default Rips truncation radius for clouds in the unit cube.
pub(crate) const DEFAULT_MAX_EDGE: f64 = 0.2;
/// Hard cap on the filtration size; beyond this the reduction is refused.
pub(crate) const DEFAULT_MAX_SIMPLICES: usize = 2_000_000;
/// Point-count widget bounds and step.
pub(crate) const MIN_POINTS: usize = 10;
pub(crate) const MAX_POINTS: usize = 1000;
pub(crate) const POINTS_STEP: usize = 10;
/// Cloud size used when a session first loads.
pub(crate) const INITIAL_POINTS: usize = 30;
/// Homological dimension the viewer ranks and extracts cycles for.
pub(crate) const CYCLE_DIM: usize = 1;
