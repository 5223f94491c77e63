use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cyclescope::prelude::*;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod frame;
mod provenance;
mod repl;
mod table;

use frame::{Frame, TextView};

#[derive(Parser)]
#[command(name = "cyclescope")]
#[command(about = "Explore representative 1-cycles of a random 3D point cloud")]
struct Cmd {
    /// Seed of the point-cloud stream; random when omitted
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Rips truncation radius
    #[arg(long, global = true, default_value_t = RipsCfg::default().max_edge)]
    max_edge: f64,

    /// Highest homological dimension to compute (0, 1, or 2)
    #[arg(long, global = true, default_value_t = 1)]
    max_dim: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read commands from stdin and re-render after each one
    Interactive {
        #[arg(long)]
        points: Option<usize>,
    },
    /// Render once to stdout
    Show {
        #[arg(long)]
        points: Option<usize>,
        #[arg(long, default_value_t = 0)]
        select: usize,
        /// Print the frame as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write the rendered frame as JSON plus a provenance sidecar
    Export {
        #[arg(long)]
        out: String,
        #[arg(long)]
        points: Option<usize>,
        #[arg(long, default_value_t = 0)]
        select: usize,
    },
    /// Write the ranked dimension-1 diagram as CSV
    Diagram {
        #[arg(long)]
        out: String,
        #[arg(long)]
        points: Option<usize>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    let rips = RipsCfg {
        max_edge: cmd.max_edge,
        max_dim: cmd.max_dim,
        ..RipsCfg::default()
    };
    let cfg = SessionCfg {
        cloud: CloudCfg { seed: cmd.seed },
        ..SessionCfg::default()
    };
    let session = Session::new(cfg, RipsPersistence::new(rips));
    match cmd.action {
        Action::Interactive { points } => interactive(session, points),
        Action::Show {
            points,
            select,
            json,
        } => show(session, points, select, json),
        Action::Export {
            out,
            points,
            select,
        } => export(session, points, select, out),
        Action::Diagram { out, points } => diagram(session, points, out),
    }
}

/// Regenerate with `points` (or the initial size), select, and compute.
fn prepare(session: &mut Session, points: Option<usize>, select: usize) -> Result<()> {
    let n = points.unwrap_or(session.cfg().controls.initial_points);
    session.apply(Controls {
        n,
        regenerate_requested: true,
        selected_index: select,
    })?;
    Ok(())
}

fn interactive(mut session: Session, points: Option<usize>) -> Result<()> {
    prepare(&mut session, points, 0)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    repl::run(&mut session, stdin.lock(), &mut stdout)
}

fn show(mut session: Session, points: Option<usize>, select: usize, json: bool) -> Result<()> {
    prepare(&mut session, points, select)?;
    let mut stdout = io::stdout().lock();
    if json {
        let mut f = Frame::default();
        render_pass(&session, &mut f);
        serde_json::to_writer_pretty(&mut stdout, &f)?;
        writeln!(stdout)?;
    } else {
        let mut v = TextView::default();
        render_pass(&session, &mut v);
        write!(stdout, "{}", v.finish())?;
    }
    Ok(())
}

fn export(mut session: Session, points: Option<usize>, select: usize, out: String) -> Result<()> {
    tracing::info!(out, points = ?points, select, "export");
    prepare(&mut session, points, select)?;
    let mut f = Frame::default();
    render_pass(&session, &mut f);
    let out_path = Path::new(&out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, serde_json::to_vec_pretty(&f)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    let prov = provenance::write_sidecar(out_path, provenance::Payload::for_session(&session))?;
    tracing::info!(provenance = %prov.display(), "export_done");
    Ok(())
}

fn diagram(mut session: Session, points: Option<usize>, out: String) -> Result<()> {
    tracing::info!(out, points = ?points, "diagram");
    prepare(&mut session, points, 0)?;
    let computed = session.ensure_computed()?;
    let mut df = table::diagram_frame(computed)?;
    let out_path = Path::new(&out);
    ensure_parent(out_path)?;
    table::write_csv(&mut df, out_path)?;
    tracing::info!(rows = df.height(), "diagram_done");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
