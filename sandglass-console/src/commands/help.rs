use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct Help;

impl Command for Help {
    fn name(&self) -> &str {
        "HELP"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if let Some(cmd) = args.first() {
            Ok(CommandOutput::Text(command_help(cmd)))
        } else {
            Ok(CommandOutput::Text(general_help()))
        }
    }
}

fn command_help(cmd: &str) -> String {
    match cmd.to_uppercase().as_str() {
        "LOAD" => "LOAD <file>\n  Load a planet catalog from a CSV file\n  Accepts name,mass,distance or raw archive columns".into(),
        "SLIST" => "SLIST [n]\n  List the filtered view (optionally first n rows)".into(),
        "NAME" => "NAME <text>\n  Keep planets whose name contains <text> (case-insensitive)\n  A single match is selected automatically".into(),
        "MASS" => "MASS <limit>\n  Keep planets lighter than <limit> Earth masses".into(),
        "DIST" => "DIST <limit>\n  Keep planets closer than <limit> parsecs".into(),
        "CLEAR" => "CLEAR\n  Remove all filters, reset the efficiency index, clear the selection".into(),
        "SELECT" => "SELECT <planet name>\n  Select a planet by exact name (case-insensitive)\n  Example: SELECT Kepler-22 b".into(),
        "EFF" => "EFF [value]\n  Show or set the efficiency index (1-100)\n  Higher values mean finer steps and longer compute".into(),
        "PROJECT" => "PROJECT\n  Run the expansion projection for the selected planet".into(),
        "GVEL" => "GVEL [file.svg]\n  Velocity curve of the last projection\n  No args = terminal chart, with file = SVG output".into(),
        "SHOW" => "SHOW\n  Display session state".into(),
        "HELP" => "HELP [command]\n  Show help for a command".into(),
        "QUIT" => "QUIT\n  Exit the program".into(),
        _ => format!("Unknown command: {}", cmd),
    }
}

fn general_help() -> String {
    "\
Commands:
  LOAD <file>        Load a planet catalog CSV

  SLIST [n]          List the filtered view
  NAME <text>        Filter by name substring
  MASS <limit>       Filter by maximum mass
  DIST <limit>       Filter by maximum distance
  CLEAR              Remove filters, reset efficiency

  SELECT <name>      Select a planet
  EFF [value]        Show/set efficiency index (1-100)
  PROJECT            Run the expansion projection
  GVEL [file]        Plot the velocity curve

  SHOW               Display session state
  HELP [cmd]         Show help
  QUIT               Exit

Type HELP <command> for details."
        .to_string()
}
