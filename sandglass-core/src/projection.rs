//! Expansion projection under Hubble's law.
//!
//! Starting from a planet's present distance, the recurrence advances the
//! distance by a fixed step, charges each step at the pre-update velocity,
//! then re-derives the velocity from the Hubble relation at the new
//! distance. Velocity therefore lags distance by one step (explicit Euler);
//! the order of operations is load-bearing and must not be reordered.

use std::time::{Duration, Instant};

use crate::constants::{
    EFFICIENCY_SCALE, HUBBLE_CONSTANT_KM_S_MPC, KM_PER_PARSEC, KM_TO_MPC,
    MAX_EFFICIENCY_INDEX, MIN_EFFICIENCY_INDEX, OBSERVABLE_UNIVERSE_EDGE_KM,
    PARSECS_PER_MEGAPARSEC, STEP_BASE_DIVISOR,
};
use crate::error::{Error, Result};
use crate::format::format_sig;
use crate::planet::Planet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParameters {
    /// km/s/Mpc.
    pub hubble_constant: f64,
    /// Loop termination boundary, km.
    pub horizon_distance_km: f64,
    /// Inversely scales step size; higher means finer, slower iteration.
    pub efficiency_index: f64,
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            hubble_constant: HUBBLE_CONSTANT_KM_S_MPC,
            horizon_distance_km: OBSERVABLE_UNIVERSE_EDGE_KM,
            efficiency_index: MIN_EFFICIENCY_INDEX,
        }
    }
}

impl ProjectionParameters {
    pub fn with_efficiency(efficiency_index: f64) -> Self {
        Self {
            efficiency_index,
            ..Self::default()
        }
    }
}

/// One recurrence step. The distance field repeats the planet's input
/// distance; only velocity evolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub distance_pc: f64,
    pub velocity_km_s: f64,
}

#[derive(Debug, Clone)]
pub struct ProjectionResult {
    /// Accumulated `step / velocity` total, reported in years.
    pub elapsed_time_years: f64,
    /// Wall-clock compute time. Diagnostic only, not reproducible.
    pub compute_duration: Duration,
    pub starting_velocity_km_s: f64,
    pub iteration_count: usize,
    pub step_size_km: f64,
    pub samples: Vec<Sample>,
}

impl ProjectionResult {
    /// Elapsed time at 5 significant digits, e.g. `1.9265e+11 years`.
    pub fn elapsed_display(&self) -> String {
        format!("{} years", format_sig(self.elapsed_time_years, 5))
    }

    /// Step size at 5 significant digits.
    pub fn step_display(&self) -> String {
        format_sig(self.step_size_km, 5)
    }
}

pub fn validate_efficiency(efficiency_index: f64) -> Result<()> {
    if !efficiency_index.is_finite()
        || !(MIN_EFFICIENCY_INDEX..=MAX_EFFICIENCY_INDEX).contains(&efficiency_index)
    {
        return Err(Error::InvalidInput(format!(
            "efficiency index must be in [{MIN_EFFICIENCY_INDEX}, {MAX_EFFICIENCY_INDEX}], got {efficiency_index}"
        )));
    }
    Ok(())
}

/// Lazy form of the recurrence: yields one [`Sample`] per step until the
/// working distance crosses the horizon. Construction performs all input
/// validation, so iteration itself cannot fail.
#[derive(Debug, Clone)]
pub struct Trace {
    distance_pc: f64,
    hubble_constant: f64,
    horizon_distance_km: f64,
    step_km: f64,
    starting_velocity_km_s: f64,
    distance_km: f64,
    velocity_km_s: f64,
    elapsed: f64,
    count: usize,
}

impl Trace {
    pub fn new(planet: &Planet, params: &ProjectionParameters) -> Result<Self> {
        planet.validate()?;
        if !(params.hubble_constant.is_finite() && params.hubble_constant > 0.0) {
            return Err(Error::InvalidInput(format!(
                "Hubble constant must be positive, got {}",
                params.hubble_constant
            )));
        }
        if !(params.horizon_distance_km.is_finite() && params.horizon_distance_km > 0.0) {
            return Err(Error::InvalidInput(format!(
                "horizon distance must be positive, got {}",
                params.horizon_distance_km
            )));
        }
        validate_efficiency(params.efficiency_index)?;

        let distance_km = planet.distance * KM_PER_PARSEC;
        let distance_mpc = planet.distance / PARSECS_PER_MEGAPARSEC;
        let velocity_km_s = params.hubble_constant * distance_mpc;
        let remaining_km = params.horizon_distance_km - distance_km;
        let step_km =
            remaining_km / STEP_BASE_DIVISOR / (params.efficiency_index * EFFICIENCY_SCALE);

        // Already at or past the horizon: a legal zero-iteration trace.
        // Otherwise a non-positive step would never terminate; fail fast.
        if distance_km < params.horizon_distance_km && !(step_km.is_finite() && step_km > 0.0) {
            return Err(Error::DegenerateStep { step_km });
        }

        Ok(Self {
            distance_pc: planet.distance,
            hubble_constant: params.hubble_constant,
            horizon_distance_km: params.horizon_distance_km,
            step_km,
            starting_velocity_km_s: velocity_km_s,
            distance_km,
            velocity_km_s,
            elapsed: 0.0,
            count: 0,
        })
    }

    pub fn starting_velocity_km_s(&self) -> f64 {
        self.starting_velocity_km_s
    }

    pub fn step_km(&self) -> f64 {
        self.step_km
    }

    /// Running `step / velocity` total over the steps taken so far.
    pub fn elapsed_time_years(&self) -> f64 {
        self.elapsed
    }

    pub fn iteration_count(&self) -> usize {
        self.count
    }

    /// Current working distance, km.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

impl Iterator for Trace {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.distance_km >= self.horizon_distance_km {
            return None;
        }
        self.distance_km += self.step_km;
        let delta_t = self.step_km / self.velocity_km_s;
        self.velocity_km_s = self.hubble_constant * (self.distance_km * KM_TO_MPC);
        self.elapsed += delta_t;
        self.count += 1;
        Some(Sample {
            distance_pc: self.distance_pc,
            velocity_km_s: self.velocity_km_s,
        })
    }
}

/// Runs the recurrence to completion.
pub fn project(planet: &Planet, params: &ProjectionParameters) -> Result<ProjectionResult> {
    let started = Instant::now();
    let mut trace = Trace::new(planet, params)?;
    let starting_velocity_km_s = trace.starting_velocity_km_s();
    let step_size_km = trace.step_km();

    let mut samples = Vec::new();
    while let Some(sample) = trace.next() {
        samples.push(sample);
    }

    Ok(ProjectionResult {
        elapsed_time_years: trace.elapsed_time_years(),
        compute_duration: started.elapsed(),
        starting_velocity_km_s,
        iteration_count: trace.iteration_count(),
        step_size_km,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(distance_pc: f64) -> Planet {
        Planet::new("Test b", 1.0, distance_pc)
    }

    fn small_params(efficiency_index: f64) -> ProjectionParameters {
        ProjectionParameters {
            hubble_constant: HUBBLE_CONSTANT_KM_S_MPC,
            horizon_distance_km: 1.0e15,
            efficiency_index,
        }
    }

    #[test]
    fn starting_velocity_is_hubble_times_mpc() {
        let result = project(&planet(10.0), &small_params(1.0)).unwrap();
        assert_eq!(result.starting_velocity_km_s, 69.8 * (10.0 / 1e6));
        assert_eq!(result.starting_velocity_km_s, 0.000698);
    }

    #[test]
    fn iteration_count_matches_samples() {
        let result = project(&planet(10.0), &small_params(1.0)).unwrap();
        assert!(result.iteration_count >= 1);
        assert_eq!(result.iteration_count, result.samples.len());
    }

    #[test]
    fn step_size_matches_formula() {
        let params = small_params(2.0);
        let result = project(&planet(10.0), &params).unwrap();
        let remaining = params.horizon_distance_km - 10.0 * KM_PER_PARSEC;
        let expected = remaining / STEP_BASE_DIVISOR / (2.0 * EFFICIENCY_SCALE);
        assert_eq!(result.step_size_km, expected);
    }

    #[test]
    fn velocities_strictly_increase() {
        let result = project(&planet(10.0), &small_params(1.0)).unwrap();
        for pair in result.samples.windows(2) {
            assert!(pair[1].velocity_km_s > pair[0].velocity_km_s);
        }
    }

    #[test]
    fn samples_repeat_input_distance() {
        let result = project(&planet(42.5), &small_params(1.0)).unwrap();
        assert!(result.samples.iter().all(|s| s.distance_pc == 42.5));
    }

    #[test]
    fn elapsed_time_is_positive() {
        let result = project(&planet(10.0), &small_params(1.0)).unwrap();
        assert!(result.elapsed_time_years > 0.0);
    }

    #[test]
    fn projection_is_deterministic() {
        let a = project(&planet(10.0), &small_params(3.0)).unwrap();
        let b = project(&planet(10.0), &small_params(3.0)).unwrap();
        assert_eq!(a.elapsed_time_years, b.elapsed_time_years);
        assert_eq!(a.iteration_count, b.iteration_count);
        assert_eq!(a.step_size_km, b.step_size_km);
        assert_eq!(a.samples, b.samples);
    }

    #[test]
    fn doubling_efficiency_halves_step_doubles_iterations() {
        let base = project(&planet(10.0), &small_params(1.0)).unwrap();
        let fine = project(&planet(10.0), &small_params(2.0)).unwrap();
        assert_eq!(fine.step_size_km, base.step_size_km / 2.0);
        let ratio = fine.iteration_count as f64 / base.iteration_count as f64;
        assert!((ratio - 2.0).abs() < 0.01, "ratio was {ratio}");
    }

    #[test]
    fn distance_already_past_horizon_runs_zero_iterations() {
        let params = ProjectionParameters {
            hubble_constant: HUBBLE_CONSTANT_KM_S_MPC,
            // 10 pc is ~3.1e14 km, beyond this horizon.
            horizon_distance_km: 1.0e14,
            efficiency_index: 1.0,
        };
        let result = project(&planet(10.0), &params).unwrap();
        assert_eq!(result.iteration_count, 0);
        assert_eq!(result.elapsed_time_years, 0.0);
        assert!(result.samples.is_empty());
    }

    #[test]
    fn ten_parsec_projection_crosses_horizon() {
        let params = ProjectionParameters {
            hubble_constant: 69.8,
            horizon_distance_km: 4.39999652819071048e41,
            efficiency_index: 1.0,
        };
        let result = project(&planet(10.0), &params).unwrap();
        assert_eq!(result.starting_velocity_km_s, 0.000698);
        assert!(result.iteration_count >= 1);
        for pair in result.samples.windows(2) {
            assert!(pair[1].velocity_km_s > pair[0].velocity_km_s);
        }
        // Working distance crossed the horizon.
        let final_km = 10.0 * KM_PER_PARSEC + result.step_size_km * result.iteration_count as f64;
        assert!(final_km >= params.horizon_distance_km);
    }

    #[test]
    fn trace_matches_project() {
        let trace = Trace::new(&planet(10.0), &small_params(1.0)).unwrap();
        let collected: Vec<Sample> = trace.collect();
        let result = project(&planet(10.0), &small_params(1.0)).unwrap();
        assert_eq!(collected, result.samples);
    }

    #[test]
    fn non_positive_distance_rejected() {
        let err = project(&planet(0.0), &small_params(1.0));
        assert!(matches!(err, Err(Error::InvalidInput(_))));
        let err = project(&planet(-5.0), &small_params(1.0));
        assert!(matches!(err, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn non_positive_hubble_rejected() {
        let params = ProjectionParameters {
            hubble_constant: 0.0,
            ..small_params(1.0)
        };
        assert!(matches!(
            project(&planet(10.0), &params),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn efficiency_out_of_range_rejected() {
        assert!(project(&planet(10.0), &small_params(0.5)).is_err());
        assert!(project(&planet(10.0), &small_params(100.5)).is_err());
        assert!(project(&planet(10.0), &small_params(f64::NAN)).is_err());
        // Range endpoints are accepted; validity is settled at construction.
        assert!(Trace::new(&planet(10.0), &small_params(100.0)).is_ok());
        assert!(Trace::new(&planet(10.0), &small_params(1.0)).is_ok());
    }

    #[test]
    fn underflowed_step_is_degenerate() {
        // Subnormal distance with the horizon one ulp above it: the
        // remaining distance divides down to zero while the loop would
        // still need to run.
        let distance_pc = 1.0e-320;
        let distance_km = distance_pc * KM_PER_PARSEC;
        let params = ProjectionParameters {
            hubble_constant: HUBBLE_CONSTANT_KM_S_MPC,
            horizon_distance_km: distance_km + 5.0e-323,
            efficiency_index: 1.0,
        };
        let err = Trace::new(&planet(distance_pc), &params);
        assert!(matches!(err, Err(Error::DegenerateStep { .. })));
    }

    #[test]
    fn default_parameters_use_reference_constants() {
        let params = ProjectionParameters::default();
        assert_eq!(params.hubble_constant, 69.8);
        assert_eq!(params.horizon_distance_km, OBSERVABLE_UNIVERSE_EDGE_KM);
        assert_eq!(params.efficiency_index, 1.0);
    }

    #[test]
    fn elapsed_display_uses_five_significant_digits() {
        let result = ProjectionResult {
            elapsed_time_years: 1.926513e11,
            compute_duration: Duration::from_millis(3),
            starting_velocity_km_s: 0.000698,
            iteration_count: 1,
            step_size_km: 2.19998e35,
            samples: vec![Sample {
                distance_pc: 10.0,
                velocity_km_s: 0.0007,
            }],
        };
        assert_eq!(result.elapsed_display(), "1.9265e+11 years");
        assert_eq!(result.step_display(), "2.2e+35");
    }
}
