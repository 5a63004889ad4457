pub mod svg;
pub mod terminal;

use sandglass_core::Sample;

/// Velocity curve as plottable points, one per iteration.
pub fn velocity_points(samples: &[Sample]) -> Vec<(f64, f64)> {
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| ((i + 1) as f64, s.velocity_km_s))
        .collect()
}

/// Thin a point set to roughly `max` entries, keeping the final point so
/// the curve still reaches the horizon crossing.
pub fn decimate(points: &[(f64, f64)], max: usize) -> Vec<(f64, f64)> {
    if max == 0 || points.len() <= max {
        return points.to_vec();
    }
    let stride = points.len().div_ceil(max);
    let mut thinned: Vec<(f64, f64)> = points.iter().copied().step_by(stride).collect();
    let last = points[points.len() - 1];
    if thinned.last() != Some(&last) {
        thinned.push(last);
    }
    thinned
}
