//! Ranked dimension-1 diagram as a polars table.

use anyhow::{Context, Result};
use cyclescope::prelude::{ratio, Computed};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// One row per diagram point in rank order: rank, diagram index, birth, death, ratio.
pub fn diagram_frame(computed: &Computed) -> PolarsResult<DataFrame> {
    let diagram = computed.cycle_diagram();
    let m = computed.ranking.len();
    let mut ranks: Vec<u32> = Vec::with_capacity(m);
    let mut index: Vec<u32> = Vec::with_capacity(m);
    let mut births: Vec<f64> = Vec::with_capacity(m);
    let mut deaths: Vec<f64> = Vec::with_capacity(m);
    let mut ratios: Vec<f64> = Vec::with_capacity(m);
    for (r, &i) in computed.ranking.iter().enumerate() {
        let p = &diagram[i];
        ranks.push(r as u32);
        index.push(i as u32);
        births.push(p.birth);
        deaths.push(p.death);
        ratios.push(ratio(p).unwrap_or(f64::NAN));
    }
    df!(
        "rank" => ranks,
        "index" => index,
        "birth" => births,
        "death" => deaths,
        "ratio" => ratios
    )
}

pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
