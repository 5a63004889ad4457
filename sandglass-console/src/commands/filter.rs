use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::{FilterOutcome, Session};

pub struct Name;
pub struct Mass;
pub struct Dist;
pub struct Clear;

impl Command for Name {
    fn name(&self) -> &str {
        "NAME"
    }
    fn description(&self) -> &str {
        "Filter the view by name substring"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        // Planet names contain spaces, so the needle is the whole tail.
        let needle = args.join(" ");
        let outcome = session.filter_name(&needle)?;
        if !outcome.applied {
            return Ok(CommandOutput::Text(format!(
                "No results containing \"{}\" found, view unchanged",
                needle.trim()
            )));
        }
        let mut text = format!(
            "{} containing \"{}\" found",
            count_phrase(outcome),
            needle.trim()
        );
        if let Some(planet) = &session.selected {
            text.push_str(&format!(", selection set to {}", planet.name));
        }
        Ok(CommandOutput::Text(text))
    }
}

impl Command for Mass {
    fn name(&self) -> &str {
        "MASS"
    }
    fn description(&self) -> &str {
        "Filter the view to planets lighter than a mass limit"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let limit = parse_limit(args, "MASS")?;
        let outcome = session.filter_max_mass(limit)?;
        Ok(limit_message(outcome, "mass", limit, "Earth masses"))
    }
}

impl Command for Dist {
    fn name(&self) -> &str {
        "DIST"
    }
    fn description(&self) -> &str {
        "Filter the view to planets closer than a distance limit"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let limit = parse_limit(args, "DIST")?;
        let outcome = session.filter_max_distance(limit)?;
        Ok(limit_message(outcome, "distance", limit, "parsecs"))
    }
}

impl Command for Clear {
    fn name(&self) -> &str {
        "CLEAR"
    }
    fn description(&self) -> &str {
        "Remove all filters and reset the efficiency index"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        session.clear_filters();
        Ok(CommandOutput::Text(format!(
            "All filters removed, original planet list restored ({} planets)",
            session.filtered_count()
        )))
    }
}

fn parse_limit(args: &[&str], cmd: &str) -> Result<f64> {
    let raw = args
        .first()
        .ok_or_else(|| Error::Parse(format!("{cmd} requires a numeric limit")))?;
    raw.parse::<f64>()
        .map_err(|_| Error::Parse(format!("invalid {cmd} limit: {raw}")))
}

fn limit_message(outcome: FilterOutcome, what: &str, limit: f64, unit: &str) -> CommandOutput {
    if !outcome.applied {
        return CommandOutput::Text(format!(
            "No results with {what} less than {limit} {unit}, view unchanged"
        ));
    }
    CommandOutput::Text(format!(
        "{} with {what} less than {limit} {unit}",
        count_phrase(outcome)
    ))
}

fn count_phrase(outcome: FilterOutcome) -> String {
    if outcome.matched == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", outcome.matched)
    }
}
