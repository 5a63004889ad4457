use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;

pub struct Eff;

impl Command for Eff {
    fn name(&self) -> &str {
        "EFF"
    }
    fn description(&self) -> &str {
        "Show or set the calculation efficiency index"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let raw = match args.first() {
            None => {
                return Ok(CommandOutput::Text(format!(
                    "Efficiency index = {}",
                    session.efficiency_index
                )));
            }
            Some(raw) => raw,
        };
        let value: f64 = raw
            .parse()
            .map_err(|_| Error::Parse(format!("invalid efficiency index: {raw}")))?;
        session.set_efficiency(value)?;
        Ok(CommandOutput::Text(format!(
            "Efficiency index set to {value}, step size scales down accordingly"
        )))
    }
}
