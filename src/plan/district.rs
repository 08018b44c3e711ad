use ahash::AHashSet;

use crate::{region::Region, types::UnitId, units::{Profile, Totals}};

/// A group of units grown from a single seed.
///
/// Holds the ordered member list, running sums, and the set of base units
/// already present. Only `add_unit` mutates it.
#[derive(Clone, Debug, Default)]
pub struct District {
    members: Vec<usize>,
    totals: Totals,
    bases: AHashSet<u32>,
}

impl District {
    /// Add a unit: append it, fold its sums, and record its base key.
    pub(crate) fn add_unit(&mut self, region: &Region, unit: usize) {
        self.members.push(unit);
        self.totals.add(region.unit(unit).totals());
        self.bases.insert(region.base(unit));
    }

    /// Member unit indices, in the order they joined.
    #[inline] pub fn members(&self) -> &[usize] { &self.members }

    /// Member identifiers, in the order they joined.
    pub fn member_ids<'a>(&'a self, region: &'a Region) -> impl Iterator<Item = &'a UnitId> + 'a {
        self.members.iter().map(|&u| region.unit(u).id())
    }

    #[inline] pub fn len(&self) -> usize { self.members.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.members.is_empty() }

    #[inline] pub fn totals(&self) -> &Totals { &self.totals }

    #[inline] pub fn population(&self) -> f64 { self.totals.population }

    /// Aggregate profile, `None` while the district is empty.
    #[inline] pub fn profile(&self) -> Option<Profile> { self.totals.profile() }

    /// Whether a unit of the given base is already a member.
    #[inline] pub fn contains_base(&self, base: u32) -> bool { self.bases.contains(&base) }

    /// Number of distinct base units among the members.
    #[inline] pub fn base_count(&self) -> usize { self.bases.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::AdjacencyList, units::{Demographics, Unit, UnitTable}};

    fn region() -> Region {
        let unit = |name: &str, population: f64, hispanic: f64| {
            Unit::new(UnitId::new(name), population, Demographics { hispanic, ..Default::default() })
                .with_food_fraction(0.5)
        };
        let units = UnitTable::new(vec![unit("douglas#1", 100.0, 10.0), unit("douglas#2", 300.0, 90.0), unit("sarpy", 100.0, 50.0)]).unwrap();
        Region::new(units, &AdjacencyList::new()).unwrap()
    }

    #[test]
    fn add_unit_updates_sums_and_bases() {
        let region = region();
        let mut district = District::default();
        assert!(district.profile().is_none());

        district.add_unit(&region, 0);
        district.add_unit(&region, 2);

        assert_eq!(district.members(), &[0, 2]);
        assert_eq!(district.population(), 200.0);
        assert_eq!(district.totals().race.hispanic, 60.0);
        assert_eq!(district.base_count(), 2);
        assert!(district.contains_base(region.base(1)));

        let profile = district.profile().unwrap();
        assert!((profile.race.hispanic - 0.3).abs() < 1e-12);
        assert!((profile.food - 0.5).abs() < 1e-12);

        let names = district.member_ids(&region).map(UnitId::as_str).collect::<Vec<_>>();
        assert_eq!(names, vec!["douglas#1", "sarpy"]);
    }
}
