use super::*;
use crate::complex::RipsCfg;
use crate::error::{ComputeError, RankError};
use crate::persistence::PairHandle;
use std::cell::Cell;

fn cfg(seed: u64) -> SessionCfg {
    SessionCfg {
        cloud: CloudCfg { seed: Some(seed) },
        ..SessionCfg::default()
    }
}

fn rips() -> RipsPersistence {
    RipsPersistence::new(RipsCfg {
        max_edge: 0.35,
        ..RipsCfg::default()
    })
}

/// Wraps the Rips computer, counts complex builds, and can be told to fail or
/// to report a zero-birth loop.
struct Scripted {
    inner: RipsPersistence,
    builds: Cell<usize>,
    fail: Cell<bool>,
    zero_birth: bool,
}

impl Scripted {
    fn new() -> Self {
        Self {
            inner: rips(),
            builds: Cell::new(0),
            fail: Cell::new(false),
            zero_birth: false,
        }
    }
}

impl PersistenceComputer for Scripted {
    fn compute_complex(&self, points: &[Point]) -> Result<Filtration, ComputeError> {
        self.builds.set(self.builds.get() + 1);
        if self.fail.get() {
            return Err(ComputeError::invalid("scripted failure"));
        }
        self.inner.compute_complex(points)
    }

    fn compute_persistence(&self, f: &Filtration) -> Result<PersistencePairing, ComputeError> {
        self.inner.compute_persistence(f)
    }

    fn compute_diagrams(
        &self,
        p: &PersistencePairing,
        f: &Filtration,
    ) -> Result<Diagrams, ComputeError> {
        let d = self.inner.compute_diagrams(p, f)?;
        if !self.zero_birth {
            return Ok(d);
        }
        let zero = DiagramPoint {
            birth: 0.0,
            death: 1.0,
            dim: 1,
            handle: PairHandle(0),
        };
        Ok(Diagrams::from_dims(vec![d.dim(0).to_vec(), vec![zero]]))
    }
}

#[test]
fn starts_empty_and_refuses_queries() {
    let mut s = Session::new(cfg(1), rips());
    assert_eq!(s.state(), State::Empty);
    assert!(s.points().is_empty());
    assert_eq!(s.ensure_computed().err(), Some(SessionError::NoPointCloud));
    assert_eq!(s.ranking().err(), Some(SessionError::NotComputed));
    assert_eq!(s.selected_cycle().err(), Some(SessionError::NotComputed));
}

#[test]
fn regenerate_then_compute() {
    let mut s = Session::new(cfg(2), rips());
    s.regenerate(60).unwrap();
    assert_eq!(s.state(), State::PointsReady);
    assert_eq!(s.points().len(), 60);
    let c = s.ensure_computed().unwrap();
    assert_eq!(c.ranking.len(), c.cycle_diagram().len());
    assert_eq!(s.state(), State::Computed);
}

#[test]
fn invalid_point_count_leaves_state_alone() {
    let mut s = Session::new(cfg(3), rips());
    s.regenerate(40).unwrap();
    s.ensure_computed().unwrap();
    let before = s.points().to_vec();
    for n in [0, 9, 1001] {
        assert_eq!(
            s.regenerate(n),
            Err(SessionError::InvalidPointCount {
                n,
                min: 10,
                max: 1000
            })
        );
    }
    assert_eq!(s.state(), State::Computed);
    assert_eq!(s.points(), before.as_slice());
}

#[test]
fn ensure_computed_is_idempotent() {
    let mut s = Session::new(cfg(4), Scripted::new());
    s.regenerate(50).unwrap();
    let first = s.ensure_computed().unwrap().clone();
    let second = s.ensure_computed().unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(s.computer().builds.get(), 1);
}

#[test]
fn recompute_on_same_points_is_deterministic() {
    let mut a = Session::new(cfg(5), rips());
    let mut b = Session::new(cfg(5), rips());
    a.regenerate(80).unwrap();
    b.regenerate(80).unwrap();
    assert_eq!(a.points(), b.points());
    assert_eq!(a.ensure_computed().unwrap(), b.ensure_computed().unwrap());
}

#[test]
fn regenerate_discards_computed_state() {
    let mut s = Session::new(cfg(6), rips());
    s.regenerate(50).unwrap();
    s.ensure_computed().unwrap();
    let old = s.points().to_vec();
    s.regenerate(70).unwrap();
    assert_eq!(s.state(), State::PointsReady);
    assert_eq!(s.ranking().err(), Some(SessionError::NotComputed));
    assert_eq!(s.diagram(1).err(), Some(SessionError::NotComputed));
    assert_eq!(s.points().len(), 70);
    assert_ne!(s.points(), old.as_slice());
    assert_eq!(s.replay().map(|t| t.index), Some(1));
}

#[test]
fn failure_keeps_points_ready_and_allows_retry() {
    let mut s = Session::new(cfg(7), Scripted::new());
    s.regenerate(30).unwrap();
    s.computer().fail.set(true);
    assert!(matches!(
        s.ensure_computed(),
        Err(SessionError::ComputationFailure(ComputeError::InvalidConfig { .. }))
    ));
    assert_eq!(s.state(), State::PointsReady);
    s.computer().fail.set(false);
    s.regenerate(30).unwrap();
    assert!(s.ensure_computed().is_ok());
}

#[test]
fn zero_birth_blocks_computed() {
    let mut s = Session::new(
        cfg(8),
        Scripted {
            zero_birth: true,
            ..Scripted::new()
        },
    );
    s.regenerate(20).unwrap();
    assert_eq!(
        s.ensure_computed().err(),
        Some(SessionError::Rank(RankError::UndefinedRatio {
            index: 0,
            birth: 0.0
        }))
    );
    assert_eq!(s.state(), State::PointsReady);
}

#[test]
fn selection_survives_recompute_and_is_validated_on_read() {
    let mut s = Session::new(cfg(9), rips());
    s.select(100_000);
    s.regenerate(40).unwrap();
    s.ensure_computed().unwrap();
    assert_eq!(s.selected(), 100_000);
    let len = s.ranking().unwrap().len();
    assert_eq!(
        s.selected_cycle(),
        Err(SessionError::Cycle(CycleError::OutOfRange {
            index: 100_000,
            len
        }))
    );
}

#[test]
fn selected_cycle_follows_ranking() {
    // Dense enough that some loops exist.
    let mut s = Session::new(cfg(10), rips());
    s.regenerate(300).unwrap();
    s.ensure_computed().unwrap();
    let ranking = s.ranking().unwrap().to_vec();
    if ranking.is_empty() {
        return;
    }
    s.select(0);
    let sel = s.selected_cycle().unwrap();
    assert_eq!(sel.index, ranking[0]);
    let pt = s.diagram(1).unwrap()[ranking[0]];
    assert_eq!((sel.birth, sel.death), (pt.birth, pt.death));
}

#[test]
fn dispatch_and_controls() {
    let mut s = Session::with_initial_cloud(cfg(11), rips()).unwrap();
    assert_eq!(s.points().len(), 30);
    assert_eq!(s.dispatch(Command::Show), Ok(State::Computed));
    let state = s
        .apply(Controls {
            n: 120,
            regenerate_requested: true,
            selected_index: 2,
        })
        .unwrap();
    assert_eq!(state, State::Computed);
    assert_eq!(s.points().len(), 120);
    assert_eq!(s.selected(), 2);
    // Rejected regeneration does not touch the selection either.
    assert!(s
        .apply(Controls {
            n: 5,
            regenerate_requested: true,
            selected_index: 0,
        })
        .is_err());
    assert_eq!(s.selected(), 2);
    assert_eq!(s.points().len(), 120);
}

#[test]
fn controls_order_regeneration_first() {
    let c = Controls {
        n: 40,
        regenerate_requested: true,
        selected_index: 3,
    };
    assert_eq!(
        c.commands(),
        vec![Command::Regenerate { n: 40 }, Command::Select { k: 3 }]
    );
    let c2 = Controls {
        regenerate_requested: false,
        ..c
    };
    assert_eq!(c2.commands(), vec![Command::Select { k: 3 }]);
}
