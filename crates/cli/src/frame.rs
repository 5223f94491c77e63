//! `View` implementations: a serializable frame and a plain-text report.

use cyclescope::cycle::{CycleSelection, Edge};
use cyclescope::persistence::DiagramPoint;
use cyclescope::view::View;
use cyclescope::Point;
use serde::Serialize;
use std::fmt::Write as _;

/// Non-finite values (essential deaths) become `null`.
fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

fn xyz(p: &Point) -> [f64; 3] {
    [p.x, p.y, p.z]
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DiagramRow {
    pub birth: f64,
    pub death: Option<f64>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SelectionRow {
    pub rank: usize,
    pub index: usize,
    pub birth: f64,
    pub death: Option<f64>,
    pub ratio: Option<f64>,
}

/// Everything one render pass produced, ready for JSON.
#[derive(Debug, Default, Serialize)]
pub struct Frame {
    pub points: Vec<[f64; 3]>,
    pub cycle_edges: Vec<[[f64; 3]; 2]>,
    pub diagram: Vec<DiagramRow>,
    pub highlighted: Option<usize>,
    pub selection: Option<SelectionRow>,
    pub notices: Vec<String>,
}

impl View for Frame {
    fn render_scatter(&mut self, points: &[Point], highlight: &[Edge]) {
        self.points = points.iter().map(xyz).collect();
        self.cycle_edges = highlight.iter().map(|(a, b)| [xyz(a), xyz(b)]).collect();
    }

    fn render_diagram(&mut self, diagram: &[DiagramPoint], highlighted: Option<usize>) {
        self.diagram = diagram
            .iter()
            .map(|p| DiagramRow {
                birth: p.birth,
                death: finite(p.death),
            })
            .collect();
        self.highlighted = highlighted;
    }

    fn render_selection(&mut self, rank: usize, s: &CycleSelection) {
        self.selection = Some(SelectionRow {
            rank,
            index: s.index,
            birth: s.birth,
            death: finite(s.death),
            ratio: s.ratio().and_then(finite),
        });
    }

    fn render_notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Human-readable report for terminals.
#[derive(Debug, Default)]
pub struct TextView {
    out: String,
}

impl TextView {
    pub fn finish(self) -> String {
        self.out
    }

    /// Append one line. Formatting into a `String` cannot fail.
    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        self.out.write_fmt(args).ok();
        self.out.push('\n');
    }
}

impl View for TextView {
    fn render_scatter(&mut self, points: &[Point], highlight: &[Edge]) {
        self.line(format_args!(
            "points: {}  cycle edges: {}",
            points.len(),
            highlight.len()
        ));
        for (a, b) in highlight {
            self.line(format_args!(
                "  ({:.4}, {:.4}, {:.4}) -- ({:.4}, {:.4}, {:.4})",
                a.x, a.y, a.z, b.x, b.y, b.z
            ));
        }
    }

    fn render_diagram(&mut self, diagram: &[DiagramPoint], highlighted: Option<usize>) {
        self.line(format_args!("dimension-1 diagram: {} points", diagram.len()));
        if let Some(p) = highlighted.and_then(|i| diagram.get(i)) {
            self.line(format_args!("  highlighted: ({:.6}, {:.6})", p.birth, p.death));
        }
    }

    fn render_selection(&mut self, rank: usize, s: &CycleSelection) {
        let ratio = s.ratio().map_or_else(|| "undefined".to_string(), |r| r.to_string());
        self.line(format_args!(
            "rank {rank} (diagram index {}): Persistence Birth: {}, Death: {} Ratio: {ratio}",
            s.index, s.birth, s.death
        ));
    }

    fn render_notice(&mut self, message: &str) {
        self.line(format_args!("{message}"));
    }
}
