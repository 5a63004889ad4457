use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;

pub struct Select;

impl Command for Select {
    fn name(&self) -> &str {
        "SELECT"
    }
    fn description(&self) -> &str {
        "Select a planet by exact name"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(Error::Parse("SELECT requires a planet name".into()));
        }
        let name = args.join(" ");
        let planet = session.select(&name)?;
        Ok(CommandOutput::Text(format!(
            "Selected {} ({} Earth masses, {} pc)",
            planet.name, planet.mass, planet.distance
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogLoad;
    use sandglass_core::Planet;

    fn loaded_session() -> Session {
        let mut session = Session::new();
        session.load_catalog(CatalogLoad {
            planets: vec![Planet::new("Kepler-22 b", 9.1, 190.062)],
            skipped: 0,
        });
        session
    }

    #[test]
    fn selects_by_spaced_name() {
        let mut session = loaded_session();
        let result = Select.execute(&mut session, &["kepler-22", "b"]).unwrap();
        assert_eq!(session.selected.as_ref().unwrap().name, "Kepler-22 b");
        match result {
            CommandOutput::Text(s) => assert!(s.contains("Selected Kepler-22 b")),
            _ => panic!("expected Text output"),
        }
    }

    #[test]
    fn unknown_name_errors() {
        let mut session = loaded_session();
        assert!(matches!(
            Select.execute(&mut session, &["Tatooine"]),
            Err(Error::UnknownPlanet(_))
        ));
    }

    #[test]
    fn missing_name_errors() {
        let mut session = loaded_session();
        assert!(Select.execute(&mut session, &[]).is_err());
    }
}
