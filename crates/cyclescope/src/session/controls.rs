//! User-facing controls: widget bounds, raw widget values, and the commands
//! they translate into.

use crate::cfg::{INITIAL_POINTS, MAX_POINTS, MIN_POINTS, POINTS_STEP};
use crate::error::SessionError;

/// Bounds a front end uses to build its input widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlSpec {
    pub min_points: usize,
    pub max_points: usize,
    pub points_step: usize,
    pub initial_points: usize,
    pub min_selection: usize,
    pub selection_step: usize,
}

impl Default for ControlSpec {
    fn default() -> Self {
        Self {
            min_points: MIN_POINTS,
            max_points: MAX_POINTS,
            points_step: POINTS_STEP,
            initial_points: INITIAL_POINTS,
            min_selection: 0,
            selection_step: 1,
        }
    }
}

impl ControlSpec {
    /// Reject point counts outside `[min_points, max_points]`. The step is a
    /// widget granularity hint and is not enforced.
    pub fn check_points(&self, n: usize) -> Result<(), SessionError> {
        if n < self.min_points || n > self.max_points {
            return Err(SessionError::InvalidPointCount {
                n,
                min: self.min_points,
                max: self.max_points,
            });
        }
        Ok(())
    }
}

/// One user interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Draw a fresh cloud of `n` points.
    Regenerate { n: usize },
    /// Choose a rank position (0 = largest death/birth ratio).
    Select { k: usize },
    /// Re-render without changing anything.
    Show,
}

/// Snapshot of the widget values after one interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub n: usize,
    pub regenerate_requested: bool,
    pub selected_index: usize,
}

impl Controls {
    /// Commands in application order: regeneration first, then selection.
    pub fn commands(&self) -> Vec<Command> {
        let mut out = Vec::with_capacity(2);
        if self.regenerate_requested {
            out.push(Command::Regenerate { n: self.n });
        }
        out.push(Command::Select {
            k: self.selected_index,
        });
        out
    }
}
