use ahash::AHashMap;
use anyhow::{ensure, Result};

use crate::{types::UnitId, units::Unit};

/// Immutable table of units, sorted by identifier.
///
/// Indices into the table are dense and follow lexicographic identifier order,
/// which gives every index-keyed structure a platform-independent ordering.
#[derive(Clone, Debug, Default)]
pub struct UnitTable {
    units: Vec<Unit>,
    index: AHashMap<UnitId, usize>,
}

impl UnitTable {
    /// Build a table, rejecting duplicate identifiers and non-positive populations.
    pub fn new(mut units: Vec<Unit>) -> Result<Self> {
        units.sort_by(|a, b| a.id().cmp(b.id()));

        for pair in units.windows(2) {
            ensure!(pair[0].id() != pair[1].id(), "[units::table] Duplicate unit identifier '{}'", pair[0].id());
        }
        for unit in &units {
            ensure!(unit.population().is_finite() && unit.population() > 0.0,
                "[units::table] Unit '{}' has non-positive population {}", unit.id(), unit.population());
        }

        let index = units.iter().enumerate()
            .map(|(i, unit)| (unit.id().clone(), i))
            .collect();

        Ok(Self { units, index })
    }

    #[inline] pub fn len(&self) -> usize { self.units.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.units.is_empty() }

    /// Get the unit at a dense index.
    #[inline] pub fn unit(&self, index: usize) -> &Unit { &self.units[index] }

    /// Look up a unit by normalized identifier.
    #[inline] pub fn get(&self, id: &str) -> Option<&Unit> { self.index_of(id).map(|i| &self.units[i]) }

    /// Dense index of a unit by normalized identifier.
    #[inline] pub fn index_of(&self, id: &str) -> Option<usize> { self.index.get(id).copied() }

    #[inline] pub fn iter(&self) -> impl Iterator<Item = &Unit> + '_ { self.units.iter() }

    pub fn total_population(&self) -> f64 { self.units.iter().map(Unit::population).sum() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Demographics;

    fn unit(name: &str, population: f64) -> Unit {
        Unit::new(UnitId::new(name), population, Demographics::default())
    }

    #[test]
    fn units_are_sorted_and_indexed() {
        let table = UnitTable::new(vec![unit("Clay", 10.0), unit("Adams", 20.0), unit("Boone", 5.0)]).unwrap();

        let names = table.iter().map(|u| u.id().as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["adams", "boone", "clay"]);
        assert_eq!(table.index_of("clay"), Some(2));
        assert_eq!(table.get("boone").unwrap().population(), 5.0);
        assert!(table.get("dawes").is_none());
        assert_eq!(table.total_population(), 35.0);
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let err = UnitTable::new(vec![unit("Adams County", 1.0), unit("adams", 2.0)]).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn non_positive_population_is_rejected() {
        assert!(UnitTable::new(vec![unit("adams", 0.0)]).is_err());
        assert!(UnitTable::new(vec![unit("adams", -3.0)]).is_err());
        assert!(UnitTable::new(vec![unit("adams", f64::NAN)]).is_err());
    }
}
