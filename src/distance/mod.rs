mod metric;
mod weights;

pub use metric::{profile_distance, zscore_distance};
pub use weights::{DistanceWeights, FeatureWeights, Stdevs};
