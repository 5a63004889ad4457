use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("unknown planet: {0}")]
    UnknownPlanet(String),

    #[error("no planet selected - use SELECT to choose one")]
    NoSelection,

    #[error("no projection computed yet - run PROJECT first")]
    NoProjection,

    #[error(transparent)]
    Core(#[from] sandglass_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
