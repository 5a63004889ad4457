use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct Show;

impl Command for Show {
    fn name(&self) -> &str {
        "SHOW"
    }
    fn description(&self) -> &str {
        "Display session state"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        let selection = session
            .selected
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "none".to_string());

        let projection = session
            .last_projection
            .as_ref()
            .map(|r| {
                format!(
                    "{} in {} ({} iterations)",
                    r.planet.name,
                    r.result.elapsed_display(),
                    r.result.iteration_count
                )
            })
            .unwrap_or_else(|| "no projection yet".to_string());

        let output = format!(
            "Catalog: {} planets\nFiltered view: {} planets\nSelection: {}\nEfficiency index: {}\nLast projection: {}",
            session.planet_count(),
            session.filtered_count(),
            selection,
            session.efficiency_index,
            projection,
        );
        Ok(CommandOutput::Text(output))
    }
}
