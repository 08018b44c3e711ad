pub mod generate;
pub mod inspect;

use anyhow::Result;
use clustermander::{read_adjacency, Region, Stdevs, UnitTable};
use tracing::info;

use crate::cli::InputArgs;

/// Load the region described by the input tables, with the deviations used to z-score distances.
pub fn load_region(input: &InputArgs) -> Result<(Region, Stdevs)> {
    info!("[load] reading adjacency from {}", input.edges.display());
    let adjacency = read_adjacency(&input.edges)?;
    info!("[load] reading unit tables from {}", input.race.display());
    let data = UnitTable::read_from_csv(&input.race, &input.food, &input.wage)?;
    let region = Region::new(data.table, &adjacency)?;

    info!("[load] {} units, {} base units, total population {:.0}", region.len(), region.base_count(), region.total_population());

    let mut stdev = Stdevs::from_profiles(region.profiles());
    if let Some(race) = data.race_stdev { stdev.race = race }

    Ok((region, stdev))
}
