//! CSV catalog loading.
//!
//! Accepts the cleaned `name,mass,distance` layout as well as a raw NASA
//! Exoplanet Archive export (`pl_name,pl_bmasse,sy_dist`) via the serde
//! aliases on [`Planet`]. Rows that fail to parse or validate are skipped
//! and counted rather than aborting the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sandglass_core::Planet;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub planets: Vec<Planet>,
    pub skipped: usize,
}

pub fn load_catalog(path: &Path) -> Result<CatalogLoad> {
    let file = File::open(path)?;
    parse_catalog(file)
}

pub fn parse_catalog<R: Read>(reader: R) -> Result<CatalogLoad> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut planets = Vec::new();
    let mut skipped = 0usize;
    for record in rdr.deserialize::<Planet>() {
        match record {
            Ok(planet) if planet.validate().is_ok() => planets.push(planet),
            Ok(_) | Err(_) => skipped += 1,
        }
    }

    if planets.is_empty() {
        return Err(Error::Catalog(format!(
            "no valid planets found ({skipped} rows skipped)"
        )));
    }
    Ok(CatalogLoad { planets, skipped })
}
