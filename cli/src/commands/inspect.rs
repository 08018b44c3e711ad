use anyhow::Result;

use crate::cli::{Cli, InspectArgs};

pub fn run(_cli: &Cli, args: &InspectArgs) -> Result<()> {
    let (region, stdev) = super::load_region(&args.input)?;

    println!("units:             {}", region.len());
    println!("base units:        {}", region.base_count());
    println!("adjacencies:       {}", region.edge_count());
    println!("total population:  {:.0}", region.total_population());
    println!("target ({:>2} dist): {:.1}", args.districts, region.target_population(args.districts));

    let unlisted = region.unlisted_units().map(|u| region.unit(u).id().as_str()).collect::<Vec<_>>();
    println!("no adjacency:      {}", if unlisted.is_empty() { "-".to_string() } else { unlisted.join(", ") });

    println!("stdev race:        {:?}", stdev.race.to_array());
    println!("stdev food:        {:.6}", stdev.food);
    println!("stdev wages:       {:.6}", stdev.wages);

    Ok(())
}
