use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("degenerate step size {step_km} km, projection would not terminate")]
    DegenerateStep { step_km: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
