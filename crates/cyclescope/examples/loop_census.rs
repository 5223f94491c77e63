//! Loop census timing probe across cloud sizes.
//!
//! Purpose
//! - Give a concrete answer to "how long does one recompute take at the top of
//!   the point-count range, and how many loops do we rank?"
//! - Uses the same session path as the CLI, so the numbers include ranking.

use std::time::Instant;

use cyclescope::prelude::*;

fn main() {
    for &n in &[100usize, 300, 600, 1000] {
        let mut session = Session::new(
            SessionCfg {
                cloud: CloudCfg { seed: Some(2024) },
                ..SessionCfg::default()
            },
            RipsPersistence::default(),
        );
        session.regenerate(n).expect("point count within bounds");
        let start = Instant::now();
        let computed = session.ensure_computed().expect("persistence computes");
        let ms = start.elapsed().as_secs_f64() * 1e3;
        let top = computed
            .ranking
            .first()
            .map(|&i| computed.cycle_diagram()[i]);
        println!(
            "n={n:5} simplices={:8} loops={:5} time={ms:8.1}ms top={:?}",
            computed.filtration.len(),
            computed.ranking.len(),
            top.map(|p| (p.birth, p.death)),
        );
    }
}
