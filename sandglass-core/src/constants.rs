/// Kilometers per parsec.
pub const KM_PER_PARSEC: f64 = 3.0857e13;

/// Kilometers to megaparsecs, as used by the velocity recurrence.
#[allow(clippy::excessive_precision)]
pub const KM_TO_MPC: f64 = 3.2407792896664e-20;

pub const PARSECS_PER_MEGAPARSEC: f64 = 1_000_000.0;

/// Recession velocity per unit distance, km/s/Mpc.
pub const HUBBLE_CONSTANT_KM_S_MPC: f64 = 69.8;

/// Distance to the edge of the observable universe, in kilometers.
#[allow(clippy::excessive_precision)]
pub const OBSERVABLE_UNIVERSE_EDGE_KM: f64 = 4.39999652819071048e40;

/// Base divisor turning the remaining distance into a step size.
pub const STEP_BASE_DIVISOR: f64 = 2_000_000.0;

/// Scale applied to the efficiency index in the step-size denominator.
pub const EFFICIENCY_SCALE: f64 = 0.1;

pub const MIN_EFFICIENCY_INDEX: f64 = 1.0;

pub const MAX_EFFICIENCY_INDEX: f64 = 100.0;
