use super::{Command, CommandOutput, ProjectionDisplay};
use crate::error::Result;
use crate::session::Session;

pub struct Project;

impl Command for Project {
    fn name(&self) -> &str {
        "PROJECT"
    }
    fn description(&self) -> &str {
        "Project the selected planet out to the observable-universe edge"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        let record = session.project()?;
        let result = &record.result;
        Ok(CommandOutput::Projection(ProjectionDisplay {
            planet_name: record.planet.name.clone(),
            distance_pc: record.planet.distance,
            mass_earths: record.planet.mass,
            efficiency_index: record.efficiency_index,
            elapsed: result.elapsed_display(),
            compute_seconds: result.compute_duration.as_secs_f64(),
            iteration_count: result.iteration_count,
            starting_velocity_km_s: result.starting_velocity_km_s,
            step: result.step_display(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogLoad;
    use crate::error::Error;
    use sandglass_core::Planet;

    fn loaded_session() -> Session {
        let mut session = Session::new();
        session.load_catalog(CatalogLoad {
            planets: vec![Planet::new("Proxima Cen b", 1.07, 1.30119)],
            skipped: 0,
        });
        session
    }

    #[test]
    fn no_selection_errors() {
        let mut session = loaded_session();
        assert!(matches!(
            Project.execute(&mut session, &[]),
            Err(Error::NoSelection)
        ));
    }

    #[test]
    fn projection_display_carries_inputs_and_summary() {
        let mut session = loaded_session();
        session.select("Proxima Cen b").unwrap();
        match Project.execute(&mut session, &[]).unwrap() {
            CommandOutput::Projection(display) => {
                assert_eq!(display.planet_name, "Proxima Cen b");
                assert_eq!(display.distance_pc, 1.30119);
                assert_eq!(display.efficiency_index, 1.0);
                assert!(display.iteration_count >= 1);
                assert!(display.elapsed.ends_with("years"));
                assert!(display.starting_velocity_km_s > 0.0);
            }
            _ => panic!("expected Projection output"),
        }
        assert!(session.last_projection.is_some());
    }
}
