//! Line-oriented command loop: one command per line, one render pass after each.

use crate::frame::TextView;
use anyhow::{bail, Result};
use cyclescope::prelude::*;
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  regen <n>    draw a fresh cloud of n points
  select <k>   show the cycle at rank k (0 = largest death/birth)
  show         render again
  help         this text
  quit         leave
";

#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Cmd(Command),
    Help,
    Quit,
    Blank,
}

pub fn parse_line(line: &str) -> Result<Line> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Line::Blank);
    };
    let arg = words.next();
    if words.next().is_some() {
        bail!("too many arguments: {line:?}");
    }
    let number = |what: &str| -> Result<usize> {
        match arg {
            Some(s) => s
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("{what} must be a non-negative integer: {e}")),
            None => bail!("missing {what}"),
        }
    };
    let parsed = match head {
        "regen" | "regenerate" => Line::Cmd(Command::Regenerate {
            n: number("point count")?,
        }),
        "select" => Line::Cmd(Command::Select {
            k: number("rank")?,
        }),
        "show" => Line::Cmd(Command::Show),
        "help" | "?" => Line::Help,
        "quit" | "exit" => Line::Quit,
        other => bail!("unknown command {other:?} (try `help`)"),
    };
    if arg.is_some() && matches!(parsed, Line::Cmd(Command::Show) | Line::Help | Line::Quit) {
        bail!("{head} takes no argument");
    }
    Ok(parsed)
}

/// Run until `quit` or end of input. Bad commands and failed recomputations
/// are reported and the loop continues.
pub fn run<C, R, W>(session: &mut Session<C>, input: R, out: &mut W) -> Result<()>
where
    C: PersistenceComputer,
    R: BufRead,
    W: Write,
{
    render(session, out)?;
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(Line::Blank) => continue,
            Ok(Line::Quit) => break,
            Ok(Line::Help) => write!(out, "{HELP}")?,
            Ok(Line::Cmd(cmd)) => {
                if let Err(err) = session.dispatch(cmd) {
                    tracing::warn!(%err, ?cmd, "command_failed");
                    writeln!(out, "error: {err}")?;
                }
                render(session, out)?;
            }
            Err(err) => writeln!(out, "error: {err}")?,
        }
    }
    Ok(())
}

fn render<C: PersistenceComputer, W: Write>(session: &Session<C>, out: &mut W) -> Result<()> {
    let mut v = TextView::default();
    render_pass(session, &mut v);
    write!(out, "{}", v.finish())?;
    out.flush()?;
    Ok(())
}
