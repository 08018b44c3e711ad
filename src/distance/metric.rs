use crate::{distance::DistanceWeights, units::Profile};

/// Guards z-scoring against a zero standard deviation.
pub const EPSILON: f64 = 1e-9;

/// Absolute difference of `a` and `b` in units of `stdev`.
#[inline]
pub fn zscore_distance(a: f64, b: f64, stdev: f64) -> f64 {
    (a - b).abs() / (stdev + EPSILON)
}

/// Weighted dissimilarity between two profiles.
///
/// The five race terms are summed and share one weight; food and wages are
/// weighted individually.
pub fn profile_distance(p: &Profile, q: &Profile, weights: &DistanceWeights) -> f64 {
    let race = p.race.to_array().into_iter()
        .zip(q.race.to_array())
        .zip(weights.stdev.race.to_array())
        .map(|((a, b), stdev)| zscore_distance(a, b, stdev))
        .sum::<f64>();

    let food = zscore_distance(p.food, q.food, weights.stdev.food);
    let wages = zscore_distance(p.wages, q.wages, weights.stdev.wages);

    weights.w_race * race + weights.w_food * food + weights.w_wages * wages
}
