use anyhow::Result;
use clustermander::{CsvPlanWriter, Generator, GeneratorConfig};

use crate::cli::{Cli, GenerateArgs};

/// Defaults, overlaid by the config file, overlaid by explicit flags.
fn config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::read_from_json(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(districts) = args.districts { config.districts = districts }
    if let Some(attempts) = args.attempts { config.max_attempts = attempts }
    if let Some(plans) = args.plans { config.target_plans = plans }
    if let Some(tolerance) = args.tolerance { config.tolerance = tolerance }
    if let Some(w) = args.w_race { config.weights.race = w }
    if let Some(w) = args.w_food { config.weights.food = w }
    if let Some(w) = args.w_wages { config.weights.wages = w }
    if args.seed.is_some() { config.seed = args.seed }
    if args.parallel { config.parallel = true }

    Ok(config)
}

pub fn run(_cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let out_dir = args.output.clone().unwrap_or("./plans".into());
    let config = config(args)?;

    let (region, stdev) = super::load_region(&args.input)?;
    let generator = Generator::new(region, stdev, config)?;

    let mut writer = CsvPlanWriter::new(&out_dir)?;
    let summary = generator.run(&mut writer)?;

    println!("Generated {} valid plans in {} attempts (master seed {})",
        summary.accepted, summary.attempts, summary.master_seed);
    for (kind, count) in &summary.rejections {
        println!("  rejected {count}: {kind}");
    }
    println!("Plans written to {}", out_dir.display());

    Ok(())
}
