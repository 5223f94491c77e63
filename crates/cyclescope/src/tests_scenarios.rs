//! End-to-end scenarios: computer → ranker → extractor → render pass.

use crate::cycle::{extract, CycleSelection, Edge};
use crate::error::CycleError;
use crate::persistence::{DiagramPoint, PersistenceComputer, RipsPersistence};
use crate::prelude::*;

fn perturbed_square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.1),
        Point::new(0.0, 1.0, 0.0),
    ]
}

fn wide() -> RipsPersistence {
    RipsPersistence::new(RipsCfg {
        max_edge: 2.0,
        ..RipsCfg::default()
    })
}

#[test]
fn perturbed_square_has_one_loop_with_four_edges() {
    let pts = perturbed_square();
    let c = wide();
    let f = c.compute_complex(&pts).unwrap();
    let p = c.compute_persistence(&f).unwrap();
    let d = c.compute_diagrams(&p, &f).unwrap();
    let h1 = d.dim(1);
    assert_eq!(h1.len(), 1);
    assert!(h1[0].birth < h1[0].death);
    assert_eq!(rank(h1).unwrap(), vec![0]);

    let sel = extract(&p, &f, h1, &pts, 0).unwrap();
    assert_eq!((sel.birth, sel.death), (h1[0].birth, h1[0].death));
    assert_eq!(sel.edges.len(), 4);
    for (a, b) in &sel.edges {
        assert!(pts.contains(a) && pts.contains(b));
        assert_ne!(a, b);
    }
    // Birth is the longer side pair, death the shorter diagonal.
    assert!((sel.birth - 1.01f64.sqrt()).abs() < 1e-12);
    assert!((sel.death - 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn colinear_pair_has_no_cycle() {
    let pts = vec![Point::new(0.0, 0.0, 0.0), Point::new(0.5, 0.5, 0.5)];
    let c = wide();
    let f = c.compute_complex(&pts).unwrap();
    let p = c.compute_persistence(&f).unwrap();
    let d = c.compute_diagrams(&p, &f).unwrap();
    assert!(d.dim(1).is_empty());
    assert!(rank(d.dim(1)).unwrap().is_empty());
    assert_eq!(
        extract(&p, &f, d.dim(1), &pts, 0),
        Err(CycleError::OutOfRange { index: 0, len: 0 })
    );
}

#[derive(Default)]
struct Notices(Vec<String>);

impl View for Notices {
    fn render_scatter(&mut self, _: &[Point], _: &[Edge]) {}
    fn render_diagram(&mut self, _: &[DiagramPoint], _: Option<usize>) {}
    fn render_selection(&mut self, _: usize, _: &CycleSelection) {}
    fn render_notice(&mut self, message: &str) {
        self.0.push(message.to_string());
    }
}

#[test]
fn two_point_session_shows_no_cycle_notice() {
    let cfg = SessionCfg {
        cloud: CloudCfg { seed: Some(1) },
        controls: ControlSpec {
            min_points: 1,
            ..ControlSpec::default()
        },
    };
    let mut s = Session::new(cfg, wide());
    s.dispatch(Command::Regenerate { n: 2 }).unwrap();
    s.dispatch(Command::Select { k: 0 }).unwrap();
    let mut v = Notices::default();
    render_pass(&s, &mut v);
    assert_eq!(v.0, vec![NO_CYCLE_NOTICE.to_string()]);
}

#[test]
fn default_top_rank_draws_a_closed_loop() {
    for n in [100, 300] {
        for seed in 0..4 {
            let cfg = SessionCfg {
                cloud: CloudCfg { seed: Some(seed) },
                ..SessionCfg::default()
            };
            let mut s = Session::new(cfg, RipsPersistence::default());
            s.dispatch(Command::Regenerate { n }).unwrap();
            s.dispatch(Command::Select { k: 0 }).unwrap();
            if n == 300 {
                assert!(!s.ranking().unwrap().is_empty(), "seed {seed}");
            }
            let Ok(sel) = s.selected_cycle() else {
                continue;
            };
            assert!(!sel.edges.is_empty(), "n {n} seed {seed}");
            let pts = s.points();
            let mut degree = vec![0usize; pts.len()];
            for (a, b) in &sel.edges {
                for q in [a, b] {
                    let i = pts.iter().position(|p| p == q).unwrap();
                    degree[i] += 1;
                }
            }
            assert!(degree.iter().all(|k| k % 2 == 0), "n {n} seed {seed}");
        }
    }
}
