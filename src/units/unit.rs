use crate::{types::UnitId, units::{Demographics, Profile, Totals}};

/// The smallest indivisible geographic entity assigned to a district.
///
/// Food and wage fields are stored as population-weighted mass, not proportions,
/// so they aggregate by plain addition.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    id: UnitId,
    totals: Totals,
}

impl Unit {
    /// Create a unit from its population and raw race counts.
    pub fn new(id: UnitId, population: f64, race: Demographics) -> Self {
        Self { id, totals: Totals { population, race, food: 0.0, wages: 0.0 } }
    }

    /// Set the SNAP mass from the fraction of the population receiving benefits.
    pub fn with_food_fraction(mut self, fraction: f64) -> Self {
        self.set_food_fraction(fraction);
        self
    }

    /// Set the wage mass from a normalized per-capita wage score.
    pub fn with_wage_score(mut self, score: f64) -> Self {
        self.set_wage_score(score);
        self
    }

    pub fn set_food_fraction(&mut self, fraction: f64) { self.totals.food = fraction * self.totals.population }

    pub fn set_wage_score(&mut self, score: f64) { self.totals.wages = score * self.totals.population }

    #[inline] pub fn id(&self) -> &UnitId { &self.id }

    #[inline] pub fn population(&self) -> f64 { self.totals.population }

    #[inline] pub fn totals(&self) -> &Totals { &self.totals }

    /// Per-capita profile, `None` when the population is not positive.
    #[inline] pub fn profile(&self) -> Option<Profile> { self.totals.profile() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_and_wages_are_stored_as_mass() {
        let unit = Unit::new(UnitId::new("Adams"), 400.0, Demographics::default())
            .with_food_fraction(0.25)
            .with_wage_score(1.5);

        assert_eq!(unit.totals().food, 100.0);
        assert_eq!(unit.totals().wages, 600.0);

        let profile = unit.profile().unwrap();
        assert_eq!(profile.food, 0.25);
        assert_eq!(profile.wages, 1.5);
    }
}
