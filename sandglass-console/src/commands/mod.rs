pub mod eff;
pub mod filter;
pub mod gvel;
pub mod help;
pub mod load;
pub mod project;
pub mod select;
pub mod show;
pub mod slist;

use crate::error::Result;
use crate::session::Session;

pub enum CommandOutput {
    Text(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Projection(ProjectionDisplay),
    None,
}

/// Everything the presentation layer needs to print a projection, handed
/// over in-process as one structured record.
pub struct ProjectionDisplay {
    pub planet_name: String,
    pub distance_pc: f64,
    pub mass_earths: f64,
    pub efficiency_index: f64,
    pub elapsed: String,
    pub compute_seconds: f64,
    pub iteration_count: usize,
    pub starting_velocity_km_s: f64,
    pub step: String,
}

pub trait Command {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput>;
}

pub fn dispatch(session: &mut Session, input: &str) -> Result<CommandOutput> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Ok(CommandOutput::None);
    }
    let cmd_name = parts[0].to_uppercase();
    let args = &parts[1..];
    match cmd_name.as_str() {
        "CLEAR" => filter::Clear.execute(session, args),
        "DIST" => filter::Dist.execute(session, args),
        "EFF" => eff::Eff.execute(session, args),
        "GVEL" => gvel::Gvel.execute(session, args),
        "HELP" => help::Help.execute(session, args),
        "LOAD" => load::Load.execute(session, args),
        "MASS" => filter::Mass.execute(session, args),
        "NAME" => filter::Name.execute(session, args),
        "PROJECT" => project::Project.execute(session, args),
        "QUIT" => Ok(CommandOutput::Text("Use Ctrl-D to exit".to_string())),
        "SELECT" => select::Select.execute(session, args),
        "SHOW" => show::Show.execute(session, args),
        "SLIST" => slist::Slist.execute(session, args),
        _ => Err(crate::error::Error::Parse(format!(
            "unknown command: {}",
            parts[0]
        ))),
    }
}
