use std::collections::BTreeMap;

use crate::{plan::District, region::Region, types::UnitId};

/// An accepted districting plan together with the attempt that produced it.
#[derive(Clone, Debug)]
pub struct Plan {
    id: usize,
    attempt: usize,
    seed: u64,
    target_population: f64,
    districts: Vec<District>,
}

impl Plan {
    pub(crate) fn new(id: usize, attempt: usize, seed: u64, target_population: f64, districts: Vec<District>) -> Self {
        Self { id, attempt, seed, target_population, districts }
    }

    /// Sequential id among the accepted plans of a run, starting at 0.
    #[inline] pub fn id(&self) -> usize { self.id }

    /// 1-based number of the attempt that produced this plan.
    #[inline] pub fn attempt(&self) -> usize { self.attempt }

    /// Random seed of the attempt; re-running that attempt with it reproduces the plan.
    #[inline] pub fn seed(&self) -> u64 { self.seed }

    /// Ideal population of each district.
    #[inline] pub fn target_population(&self) -> f64 { self.target_population }

    #[inline] pub fn districts(&self) -> &[District] { &self.districts }

    #[inline] pub fn num_districts(&self) -> usize { self.districts.len() }

    /// Population of each district.
    pub fn district_populations(&self) -> Vec<f64> {
        self.districts.iter().map(District::population).collect()
    }

    /// Relative deviation of a district's population from the target.
    #[inline]
    pub fn population_deviation(&self, district: usize) -> f64 {
        self.districts[district].population() / self.target_population - 1.0
    }

    /// Largest absolute population deviation across districts.
    pub fn max_abs_deviation(&self) -> f64 {
        (0..self.num_districts())
            .map(|d| self.population_deviation(d).abs())
            .fold(0.0, f64::max)
    }

    /// District id of every unit, keyed by identifier.
    pub fn assignments(&self, region: &Region) -> BTreeMap<UnitId, usize> {
        self.districts.iter().enumerate()
            .flat_map(|(d, district)| district.member_ids(region).map(move |id| (id.clone(), d)))
            .collect()
    }
}
