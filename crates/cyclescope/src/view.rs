//! Render collaborator and the render pass.
//!
//! `render_pass` reads a session and pushes everything a front end shows
//! through a `View`. It never mutates the session and never fails: a missing
//! computation or a selection beyond the ranking becomes a notice.

use crate::cycle::{CycleSelection, Edge};
use crate::error::SessionError;
use crate::persistence::{DiagramPoint, PersistenceComputer};
use crate::session::{Session, State};
use crate::Point;

/// Shown when the selection does not resolve to a diagram point.
pub const NO_CYCLE_NOTICE: &str = "No representative cycle available for the selected index.";
/// Shown while the session holds no computed persistence.
pub const NOT_COMPUTED_NOTICE: &str = "Persistence not computed.";

pub trait View {
    /// 3D scatter of the cloud with highlighted cycle edges.
    fn render_scatter(&mut self, points: &[Point], highlight: &[Edge]);
    /// Dimension-1 diagram; `highlighted` is a diagram index.
    fn render_diagram(&mut self, diagram: &[DiagramPoint], highlighted: Option<usize>);
    /// Birth, death and ratio of the selected class.
    fn render_selection(&mut self, rank: usize, selection: &CycleSelection);
    fn render_notice(&mut self, message: &str);
}

/// One full render of `session` into `view`.
pub fn render_pass<C: PersistenceComputer, V: View + ?Sized>(session: &Session<C>, view: &mut V) {
    let Some(computed) = session.computed() else {
        view.render_scatter(session.points(), &[]);
        view.render_notice(match session.state() {
            State::Empty => "No point cloud generated yet.",
            _ => NOT_COMPUTED_NOTICE,
        });
        return;
    };
    let rank = session.selected();
    match session.selected_cycle() {
        Ok(sel) => {
            view.render_diagram(computed.cycle_diagram(), Some(sel.index));
            view.render_selection(rank, &sel);
            view.render_scatter(session.points(), &sel.edges);
        }
        Err(err) => {
            if !matches!(err, SessionError::Cycle(_)) {
                tracing::warn!(%err, "render_selection_failed");
            }
            view.render_diagram(computed.cycle_diagram(), None);
            view.render_notice(NO_CYCLE_NOTICE);
            view.render_scatter(session.points(), &[]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::CloudCfg;
    use crate::complex::RipsCfg;
    use crate::persistence::RipsPersistence;
    use crate::session::SessionCfg;

    /// Records what was rendered.
    #[derive(Default)]
    struct Recorder {
        scatter: Option<(usize, usize)>,
        diagram: Option<(usize, Option<usize>)>,
        selection: Option<(usize, f64, f64)>,
        notices: Vec<String>,
    }

    impl View for Recorder {
        fn render_scatter(&mut self, points: &[Point], highlight: &[Edge]) {
            self.scatter = Some((points.len(), highlight.len()));
        }
        fn render_diagram(&mut self, diagram: &[DiagramPoint], highlighted: Option<usize>) {
            self.diagram = Some((diagram.len(), highlighted));
        }
        fn render_selection(&mut self, rank: usize, s: &CycleSelection) {
            self.selection = Some((rank, s.birth, s.death));
        }
        fn render_notice(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    fn session(max_edge: f64) -> Session {
        Session::new(
            SessionCfg {
                cloud: CloudCfg { seed: Some(17) },
                ..SessionCfg::default()
            },
            RipsPersistence::new(RipsCfg {
                max_edge,
                ..RipsCfg::default()
            }),
        )
    }

    #[test]
    fn empty_and_stale_sessions_render_notices() {
        let mut s = session(0.3);
        let mut v = Recorder::default();
        render_pass(&s, &mut v);
        assert_eq!(v.scatter, Some((0, 0)));
        assert_eq!(v.notices.len(), 1);

        s.regenerate(20).unwrap();
        let mut v = Recorder::default();
        render_pass(&s, &mut v);
        assert_eq!(v.scatter, Some((20, 0)));
        assert_eq!(v.notices, vec![NOT_COMPUTED_NOTICE.to_string()]);
        assert!(v.diagram.is_none());
    }

    #[test]
    fn out_of_range_selection_falls_back() {
        // Radius too small for any edge: no loops at all.
        let mut s = session(1e-6);
        s.regenerate(10).unwrap();
        s.ensure_computed().unwrap();
        s.select(0);
        let mut v = Recorder::default();
        render_pass(&s, &mut v);
        assert_eq!(v.diagram, Some((0, None)));
        assert_eq!(v.notices, vec![NO_CYCLE_NOTICE.to_string()]);
        assert!(v.selection.is_none());
        assert_eq!(v.scatter, Some((10, 0)));
    }
}
