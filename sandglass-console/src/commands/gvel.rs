use std::path::Path;

use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::plot::{decimate, velocity_points};
use crate::session::Session;

pub struct Gvel;

/// Charts cap the sample count so a fine-stepped projection does not
/// produce a megabyte SVG or stall the terminal renderer.
const MAX_PLOT_POINTS: usize = 400;

impl Command for Gvel {
    fn name(&self) -> &str {
        "GVEL"
    }
    fn description(&self) -> &str {
        "Plot the last projection's velocity curve"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let record = session.last_projection.as_ref().ok_or(Error::NoProjection)?;
        if record.result.samples.is_empty() {
            return Ok(CommandOutput::Text("No samples to plot".to_string()));
        }
        let points = decimate(&velocity_points(&record.result.samples), MAX_PLOT_POINTS);
        let title = format!("Recession Velocity - {}", record.planet.name);
        if let Some(path) = args.first() {
            write_svg(&points, Path::new(path), &title)
        } else {
            terminal_output(&points, &title)
        }
    }
}

fn write_svg(points: &[(f64, f64)], path: &Path, title: &str) -> Result<CommandOutput> {
    crate::plot::svg::line_svg(points, path, title, "iteration", "velocity (km/s)")
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?;
    Ok(CommandOutput::Text(format!("Wrote {}", path.display())))
}

fn terminal_output(points: &[(f64, f64)], title: &str) -> Result<CommandOutput> {
    let text =
        crate::plot::terminal::line_terminal(points, title, "iteration", "velocity (km/s)");
    Ok(CommandOutput::Text(text))
}
