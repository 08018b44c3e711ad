#![doc = "Clustermander public API"]
mod cluster;
mod distance;
mod graph;
mod io;
mod plan;
mod region;
mod types;
mod units;

#[doc(inline)]
pub use types::{normalize_name, UnitId, PART_SEPARATOR};

#[doc(inline)]
pub use graph::{read_adjacency, AdjacencyList};

#[doc(inline)]
pub use units::{Demographics, Profile, Totals, Unit, UnitData, UnitTable};

#[doc(inline)]
pub use distance::{profile_distance, zscore_distance, DistanceWeights, FeatureWeights, Stdevs};

#[doc(inline)]
pub use region::Region;

#[doc(inline)]
pub use plan::{CsvPlanWriter, District, Plan, PlanWriter};

#[doc(inline)]
pub use cluster::{AttemptError, AttemptResult, Generator, GeneratorConfig, RunSummary};
