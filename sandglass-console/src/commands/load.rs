use std::path::Path;

use super::{Command, CommandOutput};
use crate::catalog::load_catalog;
use crate::error::{Error, Result};
use crate::session::Session;

pub struct Load;

impl Command for Load {
    fn name(&self) -> &str {
        "LOAD"
    }
    fn description(&self) -> &str {
        "Load a planet catalog from a CSV file"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(Error::Parse("LOAD requires a filename".into()));
        }
        let load = load_catalog(Path::new(args[0]))?;
        let summary = if load.skipped > 0 {
            format!(
                "{} planets loaded ({} rows skipped)",
                load.planets.len(),
                load.skipped
            )
        } else {
            format!("{} planets loaded", load.planets.len())
        };
        session.load_catalog(load);
        Ok(CommandOutput::Text(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_filename_errors() {
        let mut session = Session::new();
        assert!(Load.execute(&mut session, &[]).is_err());
    }

    #[test]
    fn loads_catalog_from_disk() {
        let path = std::env::temp_dir().join("sandglass_load_test.csv");
        std::fs::write(&path, "name,mass,distance\nKepler-22 b,9.1,190.062\n").unwrap();
        let mut session = Session::new();
        let path_str = path.to_str().unwrap();
        let result = Load.execute(&mut session, &[path_str]).unwrap();
        match result {
            CommandOutput::Text(s) => assert!(s.contains("1 planets loaded")),
            _ => panic!("expected Text output"),
        }
        assert_eq!(session.planet_count(), 1);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn skipped_rows_are_reported() {
        let path = std::env::temp_dir().join("sandglass_load_skip_test.csv");
        std::fs::write(
            &path,
            "name,mass,distance\nKepler-22 b,9.1,190.062\nBad,-1,5\n",
        )
        .unwrap();
        let mut session = Session::new();
        let path_str = path.to_str().unwrap();
        let result = Load.execute(&mut session, &[path_str]).unwrap();
        match result {
            CommandOutput::Text(s) => assert!(s.contains("1 rows skipped")),
            _ => panic!("expected Text output"),
        }
        std::fs::remove_file(&path).ok();
    }
}
