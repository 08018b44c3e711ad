use serde::{Deserialize, Serialize};

use crate::units::{Demographics, Profile};

/// Per-feature standard deviations used to z-score profile differences.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stdevs {
    pub race: Demographics,
    pub food: f64,
    pub wages: f64,
}

impl Default for Stdevs {
    fn default() -> Self {
        Self { race: Demographics::from_array([1.0; 5]), food: 1.0, wages: 1.0 }
    }
}

impl Stdevs {
    /// Population standard deviation of each feature across `profiles`.
    /// Falls back to unit deviations when `profiles` is empty.
    pub fn from_profiles<'a>(profiles: impl IntoIterator<Item = &'a Profile>) -> Self {
        let profiles = profiles.into_iter().collect::<Vec<_>>();
        if profiles.is_empty() { return Self::default() }
        let n = profiles.len() as f64;

        let stdev = |feature: &dyn Fn(&Profile) -> f64| {
            let mean = profiles.iter().map(|p| feature(p)).sum::<f64>() / n;
            (profiles.iter().map(|p| (feature(p) - mean).powi(2)).sum::<f64>() / n).sqrt()
        };

        let mut race = [0.0; 5];
        for (k, value) in race.iter_mut().enumerate() {
            *value = stdev(&|p: &Profile| p.race.to_array()[k]);
        }

        Self {
            race: Demographics::from_array(race),
            food: stdev(&|p: &Profile| p.food),
            wages: stdev(&|p: &Profile| p.wages),
        }
    }
}

/// Relative importance of the three feature groups. Need not sum to one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureWeights {
    pub race: f64,
    pub food: f64,
    pub wages: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self { Self { race: 0.33, food: 0.33, wages: 0.33 } }
}

/// Everything the distance metric needs: deviations for z-scoring and group weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceWeights {
    pub stdev: Stdevs,
    pub w_race: f64,
    pub w_food: f64,
    pub w_wages: f64,
}

impl DistanceWeights {
    pub fn new(stdev: Stdevs, weights: FeatureWeights) -> Self {
        Self { stdev, w_race: weights.race, w_food: weights.food, w_wages: weights.wages }
    }
}
