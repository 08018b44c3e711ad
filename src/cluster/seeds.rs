use anyhow::{ensure, Result};
use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{distance::{profile_distance, DistanceWeights}, region::Region};

/// Choose up to `k` seed units, far apart in feature space and from distinct base units.
///
/// Randomized farthest-point selection: units are shuffled, the first becomes
/// seed one, and each further seed is the eligible unit with the largest
/// running minimum distance to the seeds chosen so far. The running minimum is
/// refreshed against the newest seed only. Returns fewer than `k` seeds when the
/// distinct base units run out. Equal distances go to the earlier unit in
/// shuffled order.
pub(crate) fn choose_seeds<R: Rng + ?Sized>(
    region: &Region,
    weights: &DistanceWeights,
    k: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    ensure!(!region.is_empty(), "[cluster::seeds] No valid seed found: the unit table is empty");

    let mut order = (0..region.len()).collect::<Vec<_>>();
    order.shuffle(rng);

    let mut seeds = Vec::with_capacity(k);
    if k == 0 { return Ok(seeds) }

    let mut used = vec![false; region.base_count()];
    let mut min_dist = vec![f64::INFINITY; order.len()];

    seeds.push(order[0]);
    used[region.base(order[0]) as usize] = true;

    while seeds.len() < k {
        let last = region.profile(seeds[seeds.len() - 1]);
        for (dist, &unit) in min_dist.iter_mut().zip(&order) {
            *dist = dist.min(profile_distance(last, region.profile(unit), weights));
        }

        let best = order.iter().enumerate()
            .filter(|&(_, &unit)| !used[region.base(unit) as usize])
            .fold(None, |best: Option<usize>, (i, _)| match best {
                Some(b) if min_dist[i] <= min_dist[b] => Some(b),
                _ => Some(i),
            });

        let Some(best) = best else {
            debug!("[cluster::seeds] ran out of distinct base units after {} of {k} seeds", seeds.len());
            break
        };

        seeds.push(order[best]);
        used[region.base(order[best]) as usize] = true;
    }

    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        distance::{FeatureWeights, Stdevs},
        graph::AdjacencyList,
        types::UnitId,
        units::{Demographics, Unit, UnitTable},
    };

    fn region(units: &[(&str, f64)]) -> Region {
        let units = units.iter()
            .map(|&(name, hispanic)| {
                Unit::new(UnitId::new(name), 100.0, Demographics { hispanic: hispanic * 100.0, ..Default::default() })
            })
            .collect();
        Region::new(UnitTable::new(units).unwrap(), &AdjacencyList::new()).unwrap()
    }

    fn weights(region: &Region) -> DistanceWeights {
        DistanceWeights::new(Stdevs::from_profiles(region.profiles()), FeatureWeights::default())
    }

    #[test]
    fn returns_k_seeds_from_distinct_bases() {
        let region = region(&[
            ("douglas#1", 0.1), ("douglas#2", 0.9), ("douglas#3", 0.5),
            ("lancaster#1", 0.2), ("lancaster#2", 0.8),
            ("sarpy", 0.3), ("hall", 0.7), ("buffalo", 0.4),
        ]);
        let weights = weights(&region);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for k in 1..=5 {
                let seeds = choose_seeds(&region, &weights, k, &mut rng).unwrap();
                assert_eq!(seeds.len(), k);
                let bases = seeds.iter().map(|&s| region.base(s)).collect::<HashSet<_>>();
                assert_eq!(bases.len(), k);
            }
        }
    }

    #[test]
    fn stops_early_when_bases_run_out() {
        let region = region(&[("douglas#1", 0.1), ("douglas#2", 0.9), ("sarpy", 0.5)]);
        let mut rng = StdRng::seed_from_u64(1);
        let seeds = choose_seeds(&region, &weights(&region), 3, &mut rng).unwrap();
        assert_eq!(seeds.len(), 2);
        assert_ne!(region.base(seeds[0]), region.base(seeds[1]));
    }

    #[test]
    fn second_seed_is_farthest_from_first() {
        let region = region(&[("a", 0.0), ("b", 0.1), ("c", 0.2), ("d", 1.0)]);
        let weights = weights(&region);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let seeds = choose_seeds(&region, &weights, 2, &mut rng).unwrap();
            // Whatever the first pick, the farthest unit from it is an extreme.
            let expected = if seeds[0] == 3 { 0 } else { 3 };
            assert_eq!(seeds[1], expected, "first seed {}", seeds[0]);
        }
    }

    #[test]
    fn same_rng_seed_gives_same_seeds() {
        let region = region(&[("a", 0.0), ("b", 0.3), ("c", 0.6), ("d", 0.9), ("e", 0.45)]);
        let weights = weights(&region);
        let first = choose_seeds(&region, &weights, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = choose_seeds(&region, &weights, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_region_is_an_error() {
        let region = Region::new(UnitTable::default(), &AdjacencyList::new()).unwrap();
        let weights = DistanceWeights::new(Stdevs::default(), FeatureWeights::default());
        assert!(choose_seeds(&region, &weights, 3, &mut StdRng::seed_from_u64(0)).is_err());
    }
}
