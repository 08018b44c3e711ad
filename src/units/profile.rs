use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Values for the five race/ethnicity categories.
///
/// Holds raw counts in a `Totals` and proportions in a `Profile`. The categories
/// overlap (Hispanic origin is orthogonal to race), so proportions need not sum to one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub hispanic: f64,
    pub white: f64,
    pub black: f64,
    pub american_indian: f64,
    pub asian: f64,
}

impl Demographics {
    /// Category names, in the order used by `to_array`.
    pub const CATEGORIES: [&'static str; 5] = ["hispanic", "white", "black", "american_indian", "asian"];

    #[inline]
    pub fn to_array(&self) -> [f64; 5] {
        [self.hispanic, self.white, self.black, self.american_indian, self.asian]
    }

    #[inline]
    pub fn from_array([hispanic, white, black, american_indian, asian]: [f64; 5]) -> Self {
        Self { hispanic, white, black, american_indian, asian }
    }

    /// Apply `f` to every category.
    #[inline]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_array(self.to_array().map(f))
    }
}

impl AddAssign for Demographics {
    fn add_assign(&mut self, other: Self) {
        self.hispanic += other.hispanic;
        self.white += other.white;
        self.black += other.black;
        self.american_indian += other.american_indian;
        self.asian += other.asian;
    }
}

/// Running sums for a unit or a district: population, race counts,
/// SNAP-recipient mass and population-weighted wage mass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub population: f64,
    pub race: Demographics,
    pub food: f64,
    pub wages: f64,
}

impl Totals {
    /// Fold another aggregate into this one.
    #[inline]
    pub fn add(&mut self, other: &Totals) {
        self.population += other.population;
        self.race += other.race;
        self.food += other.food;
        self.wages += other.wages;
    }

    /// Normalize sums by population. `None` when the population is not positive.
    pub fn profile(&self) -> Option<Profile> {
        if !(self.population > 0.0) { return None }
        let population = self.population;

        Some(Profile {
            race: self.race.map(|count| count / population),
            food: self.food / population,
            wages: self.wages / population,
        })
    }
}

/// Normalized (per-capita) feature vector used for distance comparisons.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Profile {
    pub race: Demographics,
    pub food: f64,
    pub wages: f64,
}
