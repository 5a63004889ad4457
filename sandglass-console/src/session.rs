use sandglass_core::projection::{self, ProjectionParameters, ProjectionResult};
use sandglass_core::Planet;

use crate::catalog::CatalogLoad;
use crate::error::{Error, Result};
use crate::filter;

/// A stored projection together with the inputs it was computed from.
#[derive(Debug, Clone)]
pub struct ProjectionRecord {
    pub planet: Planet,
    pub efficiency_index: f64,
    pub result: ProjectionResult,
}

/// Result of applying a filter to the current view. A filter that matches
/// nothing reports `applied: false` and leaves the view untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    pub matched: usize,
    pub applied: bool,
}

pub struct Session {
    pub planets: Vec<Planet>,
    pub filtered: Vec<Planet>,
    pub selected: Option<Planet>,
    pub efficiency_index: f64,
    pub last_projection: Option<ProjectionRecord>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            planets: Vec::new(),
            filtered: Vec::new(),
            selected: None,
            efficiency_index: 1.0,
            last_projection: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_catalog(&mut self, load: CatalogLoad) {
        self.planets = load.planets;
        self.filtered = self.planets.clone();
        self.selected = None;
        self.last_projection = None;
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn filter_name(&mut self, needle: &str) -> Result<FilterOutcome> {
        let matched = filter::by_name(&self.filtered, needle)?;
        // A single hit doubles as a selection.
        if matched.len() == 1 {
            self.selected = Some(matched[0].clone());
        } else {
            self.selected = None;
        }
        Ok(self.commit(matched))
    }

    pub fn filter_max_mass(&mut self, limit: f64) -> Result<FilterOutcome> {
        let matched = filter::by_max_mass(&self.filtered, limit)?;
        self.selected = None;
        Ok(self.commit(matched))
    }

    pub fn filter_max_distance(&mut self, limit: f64) -> Result<FilterOutcome> {
        let matched = filter::by_max_distance(&self.filtered, limit)?;
        self.selected = None;
        Ok(self.commit(matched))
    }

    fn commit(&mut self, matched: Vec<Planet>) -> FilterOutcome {
        let outcome = FilterOutcome {
            matched: matched.len(),
            applied: !matched.is_empty(),
        };
        if outcome.applied {
            self.filtered = matched;
        }
        outcome
    }

    pub fn clear_filters(&mut self) {
        self.filtered = self.planets.clone();
        self.efficiency_index = 1.0;
        self.selected = None;
    }

    pub fn select(&mut self, name: &str) -> Result<&Planet> {
        let wanted = name.trim();
        let found = self
            .planets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| Error::UnknownPlanet(wanted.to_string()))?;
        self.selected = Some(found);
        Ok(self.selected.as_ref().unwrap())
    }

    pub fn set_efficiency(&mut self, value: f64) -> Result<()> {
        projection::validate_efficiency(value)?;
        self.efficiency_index = value;
        Ok(())
    }

    /// Runs the projector on the current selection at the session's
    /// efficiency index and stores the result.
    pub fn project(&mut self) -> Result<&ProjectionRecord> {
        let planet = self.selected.clone().ok_or(Error::NoSelection)?;
        let params = ProjectionParameters::with_efficiency(self.efficiency_index);
        let result = projection::project(&planet, &params)?;
        self.last_projection = Some(ProjectionRecord {
            planet,
            efficiency_index: self.efficiency_index,
            result,
        });
        Ok(self.last_projection.as_ref().unwrap())
    }
}
