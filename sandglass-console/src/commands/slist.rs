use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;

pub struct Slist;

impl Command for Slist {
    fn name(&self) -> &str {
        "SLIST"
    }
    fn description(&self) -> &str {
        "List planets in the current filtered view"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if session.filtered.is_empty() {
            return Ok(CommandOutput::Text("No planets in the current view".to_string()));
        }
        let limit = match args.first() {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| Error::Parse(format!("invalid row count: {raw}")))?,
            None => session.filtered.len(),
        };

        let headers = vec![
            "#".to_string(),
            "Name".to_string(),
            "Mass (Me)".to_string(),
            "Distance (pc)".to_string(),
        ];
        let rows = session
            .filtered
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, p)| {
                vec![
                    format!("{}", i + 1),
                    p.name.clone(),
                    format!("{:.4}", p.mass),
                    format!("{:.4}", p.distance),
                ]
            })
            .collect();
        Ok(CommandOutput::Table { headers, rows })
    }
}
