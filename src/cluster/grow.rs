use tracing::{trace, warn};

use crate::{
    cluster::{AttemptError, Frontier},
    distance::{profile_distance, DistanceWeights},
    plan::District,
    region::Region,
};

/// Grows all districts at once from their seeds through a shared frontier.
///
/// Holds only shared, read-only state; each call to `grow` owns its districts,
/// frontier and assignment vector, so one grower can serve many attempts.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Grower<'a> {
    region: &'a Region,
    weights: &'a DistanceWeights,
    num_districts: usize,
    bound: f64,
}

impl<'a> Grower<'a> {
    /// `bound` is the largest population a district may reach.
    pub(crate) fn new(region: &'a Region, weights: &'a DistanceWeights, num_districts: usize, bound: f64) -> Self {
        Self { region, weights, num_districts, bound }
    }

    /// Assign every unit to the district of one of `seeds`.
    ///
    /// The first `num_districts` seeds are used. A candidate is rejected if its
    /// base unit is already in the target district or if it would push the
    /// district above the bound; rejected candidates are not requeued.
    pub(crate) fn grow(&self, seeds: &[usize]) -> Result<Vec<District>, AttemptError> {
        let region = self.region;
        if seeds.len() < self.num_districts {
            return Err(AttemptError::TooFewSeeds { found: seeds.len(), needed: self.num_districts })
        }

        let mut districts = vec![District::default(); self.num_districts];
        let mut assigned = vec![None::<usize>; region.len()];
        let mut remaining = region.len();

        for (d, &seed) in seeds.iter().take(self.num_districts).enumerate() {
            let unit = region.unit(seed);
            if unit.population() > self.bound {
                return Err(AttemptError::SeedOversized {
                    unit: unit.id().clone(),
                    population: unit.population(),
                    bound: self.bound,
                })
            }
            self.join(&mut districts[d], &mut assigned, d, seed);
            remaining -= 1;
        }

        let mut frontier = Frontier::new();
        for (d, district) in districts.iter().enumerate() {
            self.push_neighbors(district, d, &assigned, &mut frontier);
        }

        while remaining > 0 {
            let Some(candidate) = frontier.pop() else {
                return Err(AttemptError::FrontierExhausted { remaining })
            };
            let (d, u) = (candidate.district, candidate.unit);

            // Stale: another district already took this unit.
            if assigned[u].is_some() { continue }

            let district = &mut districts[d];
            if district.contains_base(region.base(u)) { continue }
            if district.population() + region.unit(u).population() > self.bound { continue }

            self.join(district, &mut assigned, d, u);
            remaining -= 1;
            trace!("[cluster::grow] unit '{}' joined district {d} at distance {:.4}", region.unit(u).id(), candidate.distance);

            self.push_neighbors(&districts[d], d, &assigned, &mut frontier);
        }

        trace!("[cluster::grow] all units assigned, {} candidates left in the frontier", frontier.len());

        for (d, district) in districts.iter().enumerate() {
            if district.population() > self.bound {
                return Err(AttemptError::DistrictOverTolerance { district: d, population: district.population(), bound: self.bound })
            }
        }

        Ok(districts)
    }

    fn join(&self, district: &mut District, assigned: &mut [Option<usize>], d: usize, unit: usize) {
        district.add_unit(self.region, unit);
        assigned[unit] = Some(d);

        if !self.region.has_adjacency(unit) {
            warn!("[cluster::grow] unit '{}' in district {d} is not in the adjacency graph; its neighbors are not expanded",
                self.region.unit(unit).id());
        }
    }

    /// Queue every unassigned neighbor of every member, ranked against the
    /// district's current aggregate profile.
    fn push_neighbors(&self, district: &District, d: usize, assigned: &[Option<usize>], frontier: &mut Frontier) {
        let Some(profile) = district.profile() else { return };

        for &member in district.members() {
            if !self.region.has_adjacency(member) { continue }
            for neighbor in self.region.neighbors(member) {
                if assigned[neighbor].is_some() { continue }
                let distance = profile_distance(&profile, self.region.profile(neighbor), self.weights);
                frontier.push(distance, d, neighbor);
            }
        }
    }
}
