use thiserror::Error;

use crate::types::UnitId;

/// Reasons a single attempt is rejected. These never abort a run; the attempt
/// loop counts them and tries again with fresh randomness.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AttemptError {
    #[error("seed '{unit}' has population {population:.0}, above the district bound {bound:.0}")]
    SeedOversized { unit: UnitId, population: f64, bound: f64 },

    #[error("found {found} seeds from distinct base units, need {needed}")]
    TooFewSeeds { found: usize, needed: usize },

    #[error("frontier exhausted with {remaining} units unassigned")]
    FrontierExhausted { remaining: usize },

    #[error("district {district} has population {population:.0}, above the bound {bound:.0}")]
    DistrictOverTolerance { district: usize, population: f64, bound: f64 },

    #[error("district {district} is empty")]
    EmptyDistrict { district: usize },

    #[error("plan coverage mismatch: {missing} units missing, {duplicated} assigned twice")]
    CoverageMismatch { missing: usize, duplicated: usize },

    #[error("district {district} holds more than one part of base unit '{base}'")]
    DuplicateBase { district: usize, base: UnitId },
}

impl AttemptError {
    /// Short stable name, used to tally rejections.
    pub fn kind(&self) -> &'static str {
        match self {
            AttemptError::SeedOversized { .. } => "seed_oversized",
            AttemptError::TooFewSeeds { .. } => "too_few_seeds",
            AttemptError::FrontierExhausted { .. } => "frontier_exhausted",
            AttemptError::DistrictOverTolerance { .. } => "district_over_tolerance",
            AttemptError::EmptyDistrict { .. } => "empty_district",
            AttemptError::CoverageMismatch { .. } => "coverage_mismatch",
            AttemptError::DuplicateBase { .. } => "duplicate_base",
        }
    }
}
