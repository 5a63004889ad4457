use std::fmt;

use serde::Deserialize;

use crate::error::{Error, Result};

/// A cataloged planet as seen from the observer.
///
/// Deserializes from both the cleaned column names and the NASA Exoplanet
/// Archive's native ones (`pl_name`, `pl_bmasse`, `sy_dist`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Planet {
    #[serde(alias = "pl_name")]
    pub name: String,

    /// Mass in Earth masses. Carried for display; the projector ignores it.
    #[serde(alias = "pl_bmasse", alias = "pl_masse")]
    pub mass: f64,

    /// Distance from the observer in parsecs.
    #[serde(alias = "sy_dist")]
    pub distance: f64,
}

impl Planet {
    pub fn new(name: impl Into<String>, mass: f64, distance: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            distance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidInput("planet name is empty".into()));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(Error::InvalidInput(format!(
                "planet {} has non-positive mass {}",
                self.name, self.mass
            )));
        }
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return Err(Error::InvalidInput(format!(
                "planet {} has non-positive distance {}",
                self.name, self.distance
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_planet_passes() {
        assert!(Planet::new("Kepler-22 b", 9.1, 190.0).validate().is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(Planet::new("  ", 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn non_positive_mass_rejected() {
        assert!(Planet::new("X", 0.0, 1.0).validate().is_err());
        assert!(Planet::new("X", -2.0, 1.0).validate().is_err());
    }

    #[test]
    fn non_positive_distance_rejected() {
        assert!(Planet::new("X", 1.0, 0.0).validate().is_err());
        assert!(Planet::new("X", 1.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn display_is_name() {
        assert_eq!(Planet::new("HD 189733 b", 370.0, 19.8).to_string(), "HD 189733 b");
    }
}
