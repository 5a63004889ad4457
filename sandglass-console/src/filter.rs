//! Predicate filters over an in-memory planet list.
//!
//! Each filter takes the current view and returns the matching subset, so
//! successive filters compose. Limits are strict upper bounds.

use sandglass_core::Planet;

use crate::error::{Error, Result};

/// Longest accepted name-search needle.
pub const MAX_NAME_FILTER_LEN: usize = 30;

/// Case-insensitive substring match on the planet name.
pub fn by_name(planets: &[Planet], needle: &str) -> Result<Vec<Planet>> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return Err(Error::InvalidFilter("name filter value cannot be empty".into()));
    }
    if needle.len() > MAX_NAME_FILTER_LEN {
        return Err(Error::InvalidFilter(format!(
            "name filter value cannot exceed {MAX_NAME_FILTER_LEN} characters"
        )));
    }
    Ok(planets
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect())
}

/// Keep planets lighter than `limit` Earth masses.
pub fn by_max_mass(planets: &[Planet], limit: f64) -> Result<Vec<Planet>> {
    validate_limit(limit, "mass")?;
    Ok(planets.iter().filter(|p| p.mass < limit).cloned().collect())
}

/// Keep planets closer than `limit` parsecs.
pub fn by_max_distance(planets: &[Planet], limit: f64) -> Result<Vec<Planet>> {
    validate_limit(limit, "distance")?;
    Ok(planets
        .iter()
        .filter(|p| p.distance < limit)
        .cloned()
        .collect())
}

fn validate_limit(limit: f64, what: &str) -> Result<()> {
    if !(limit.is_finite() && limit > 0.0) {
        return Err(Error::InvalidFilter(format!(
            "{what} limit must be greater than zero, got {limit}"
        )));
    }
    Ok(())
}
