//! Session state machine.
//!
//! States
//! - `Empty`: no cloud yet.
//! - `PointsReady`: a cloud, nothing computed.
//! - `Computed`: filtration, pairing, diagrams and ranking, all from the
//!   current cloud.
//!
//! Transitions
//! - `regenerate(n)`: any state → `PointsReady` (bounds-checked first; a
//!   rejected `n` leaves the session untouched).
//! - `ensure_computed()`: `PointsReady` → `Computed`; no-op when `Computed`.
//!   Every stage runs before anything is stored, so a failure leaves the
//!   session in `PointsReady`.
//! - `select(k)`: records a rank position; validated when read.
//!
//! The session is owned by the front end and driven through explicit calls or
//! `dispatch`; nothing recomputes implicitly.

mod controls;

pub use controls::{Command, ControlSpec, Controls};

use crate::cfg::CYCLE_DIM;
use crate::cloud::{generate_replay, CloudCfg, ReplayToken};
use crate::complex::Filtration;
use crate::cycle::{extract, CycleSelection};
use crate::error::{CycleError, SessionError};
use crate::persistence::{
    DiagramPoint, Diagrams, PersistenceComputer, PersistencePairing, RipsPersistence,
};
use crate::rank::rank;
use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Empty,
    PointsReady,
    Computed,
}

/// Session configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionCfg {
    pub cloud: CloudCfg,
    pub controls: ControlSpec,
}

/// Everything derived from one cloud. Built in one go, dropped in one go.
#[derive(Clone, Debug, PartialEq)]
pub struct Computed {
    pub filtration: Filtration,
    pub pairing: PersistencePairing,
    pub diagrams: Diagrams,
    /// Dimension-1 diagram indices by death/birth ratio, descending.
    pub ranking: Vec<usize>,
}

impl Computed {
    /// The dimension-1 diagram the ranking refers to.
    #[inline]
    pub fn cycle_diagram(&self) -> &[DiagramPoint] {
        self.diagrams.dim(CYCLE_DIM)
    }

    /// Diagram index at rank position `k`.
    pub fn ranked(&self, k: usize) -> Result<usize, CycleError> {
        self.ranking.get(k).copied().ok_or(CycleError::OutOfRange {
            index: k,
            len: self.ranking.len(),
        })
    }
}

pub struct Session<C = RipsPersistence> {
    cfg: SessionCfg,
    computer: C,
    seed: u64,
    draws: u64,
    replay: Option<ReplayToken>,
    points: Option<Vec<Point>>,
    computed: Option<Computed>,
    selected: usize,
}

impl<C: PersistenceComputer> Session<C> {
    /// New session in `Empty`. Without a configured seed one is drawn from OS entropy.
    pub fn new(cfg: SessionCfg, computer: C) -> Self {
        let seed = cfg.cloud.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, "session_new");
        Self {
            cfg,
            computer,
            seed,
            draws: 0,
            replay: None,
            points: None,
            computed: None,
            selected: 0,
        }
    }

    /// New session already holding a cloud of the configured initial size.
    pub fn with_initial_cloud(cfg: SessionCfg, computer: C) -> Result<Self, SessionError> {
        let mut s = Self::new(cfg, computer);
        s.regenerate(cfg.controls.initial_points)?;
        Ok(s)
    }

    pub fn state(&self) -> State {
        match (&self.points, &self.computed) {
            (None, _) => State::Empty,
            (Some(_), None) => State::PointsReady,
            (Some(_), Some(_)) => State::Computed,
        }
    }

    pub fn cfg(&self) -> &SessionCfg {
        &self.cfg
    }

    pub fn computer(&self) -> &C {
        &self.computer
    }

    /// Token that replays the current cloud, if any.
    pub fn replay(&self) -> Option<ReplayToken> {
        self.replay
    }

    /// Current cloud; empty in `Empty`.
    pub fn points(&self) -> &[Point] {
        self.points.as_deref().unwrap_or(&[])
    }

    pub fn computed(&self) -> Option<&Computed> {
        self.computed.as_ref()
    }

    pub fn ranking(&self) -> Result<&[usize], SessionError> {
        self.computed
            .as_ref()
            .map(|c| c.ranking.as_slice())
            .ok_or(SessionError::NotComputed)
    }

    pub fn diagram(&self, dim: usize) -> Result<&[DiagramPoint], SessionError> {
        self.computed
            .as_ref()
            .map(|c| c.diagrams.dim(dim))
            .ok_or(SessionError::NotComputed)
    }

    /// Selected rank position (unvalidated).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Replace the cloud with `n` fresh points and drop everything derived.
    pub fn regenerate(&mut self, n: usize) -> Result<(), SessionError> {
        self.cfg.controls.check_points(n)?;
        let tok = ReplayToken {
            seed: self.seed,
            index: self.draws,
        };
        let points = generate_replay(n, tok)?;
        self.draws = self.draws.wrapping_add(1);
        self.replay = Some(tok);
        self.points = Some(points);
        self.computed = None;
        tracing::info!(n, seed = tok.seed, index = tok.index, "regenerate");
        Ok(())
    }

    /// Compute filtration, pairing, diagrams and ranking for the current cloud.
    pub fn ensure_computed(&mut self) -> Result<&Computed, SessionError> {
        let points = self.points.as_deref().ok_or(SessionError::NoPointCloud)?;
        if self.computed.is_none() {
            let filtration = self.computer.compute_complex(points)?;
            let pairing = self.computer.compute_persistence(&filtration)?;
            let diagrams = self.computer.compute_diagrams(&pairing, &filtration)?;
            let ranking = rank(diagrams.dim(CYCLE_DIM))?;
            tracing::info!(
                simplices = filtration.len(),
                cycles = ranking.len(),
                "computed"
            );
            self.computed = Some(Computed {
                filtration,
                pairing,
                diagrams,
                ranking,
            });
        }
        self.computed.as_ref().ok_or(SessionError::NotComputed)
    }

    pub fn select(&mut self, k: usize) {
        tracing::debug!(k, "select");
        self.selected = k;
    }

    /// Representative cycle of the selected rank position.
    pub fn selected_cycle(&self) -> Result<CycleSelection, SessionError> {
        let c = self.computed.as_ref().ok_or(SessionError::NotComputed)?;
        let index = c.ranked(self.selected)?;
        Ok(extract(
            &c.pairing,
            &c.filtration,
            c.cycle_diagram(),
            self.points(),
            index,
        )?)
    }

    /// Apply one interaction, then bring the session up to date.
    pub fn dispatch(&mut self, cmd: Command) -> Result<State, SessionError> {
        match cmd {
            Command::Regenerate { n } => self.regenerate(n)?,
            Command::Select { k } => self.select(k),
            Command::Show => {}
        }
        self.ensure_computed()?;
        Ok(self.state())
    }

    /// Apply a widget snapshot; stops at the first failing command.
    pub fn apply(&mut self, controls: Controls) -> Result<State, SessionError> {
        let mut state = self.state();
        for cmd in controls.commands() {
            state = self.dispatch(cmd)?;
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests;
