use ahash::AHashSet;

use crate::{cluster::AttemptError, plan::District, region::Region};

/// Check a completed partition: the expected number of non-empty districts,
/// every district within `bound`, no base unit repeated inside a district, and
/// every unit assigned exactly once.
pub(crate) fn validate(region: &Region, districts: &[District], num_districts: usize, bound: f64) -> Result<(), AttemptError> {
    if districts.len() < num_districts {
        return Err(AttemptError::EmptyDistrict { district: districts.len() })
    }

    let mut seen = vec![false; region.len()];
    let mut duplicated = 0;

    for (d, district) in districts.iter().enumerate() {
        if district.is_empty() || !(district.population() > 0.0) {
            return Err(AttemptError::EmptyDistrict { district: d })
        }
        if district.population() > bound {
            return Err(AttemptError::DistrictOverTolerance { district: d, population: district.population(), bound })
        }

        let mut bases = AHashSet::with_capacity(district.len());
        for &unit in district.members() {
            if !bases.insert(region.base(unit)) {
                return Err(AttemptError::DuplicateBase { district: d, base: region.base_name(region.base(unit)).clone() })
            }
            if std::mem::replace(&mut seen[unit], true) { duplicated += 1 }
        }
    }

    let missing = seen.iter().filter(|&&s| !s).count();
    if missing > 0 || duplicated > 0 {
        return Err(AttemptError::CoverageMismatch { missing, duplicated })
    }

    Ok(())
}
