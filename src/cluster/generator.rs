use std::sync::Arc;

use anyhow::{bail, ensure, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    cluster::{choose_seeds, validate, AttemptError, GeneratorConfig, Grower, RunSummary},
    distance::{DistanceWeights, Stdevs},
    plan::{District, Plan, PlanWriter},
    region::Region,
};

/// Result of one attempt: a validated partition, or the reason it was rejected.
pub type AttemptResult = std::result::Result<Vec<District>, AttemptError>;

/// Drives repeated independent attempts until enough plans are accepted or the
/// attempt budget runs out.
///
/// Attempt seeds are drawn in order from the master seed and each attempt owns
/// its own RNG, so a run is reproducible whether or not attempts run in parallel.
#[derive(Clone, Debug)]
pub struct Generator {
    region: Arc<Region>,
    weights: DistanceWeights,
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(region: impl Into<Arc<Region>>, stdev: Stdevs, config: GeneratorConfig) -> Result<Self> {
        let region: Arc<Region> = region.into();
        config.validate()?;
        ensure!(!region.is_empty(), "[cluster::generator] No units available to seed from");

        if config.districts > region.base_count() {
            warn!("[cluster::generator] {} districts requested but only {} distinct base units exist; every attempt will fail",
                config.districts, region.base_count());
        }

        let weights = DistanceWeights::new(stdev, config.weights);
        Ok(Self { region, weights, config })
    }

    #[inline] pub fn region(&self) -> &Region { &self.region }

    #[inline] pub fn config(&self) -> &GeneratorConfig { &self.config }

    #[inline] pub fn weights(&self) -> &DistanceWeights { &self.weights }

    /// Ideal population of each district.
    #[inline]
    pub fn target_population(&self) -> f64 { self.region.target_population(self.config.districts) }

    /// Largest population a district may reach.
    #[inline]
    pub fn population_bound(&self) -> f64 { self.config.population_bound(self.target_population()) }

    /// Run one attempt with its own seed: choose seeds, grow, validate.
    ///
    /// The outer error is fatal (no units to seed from); the inner one only
    /// rejects this attempt.
    pub fn attempt(&self, seed: u64) -> Result<AttemptResult> {
        let mut rng = StdRng::seed_from_u64(seed);
        let seeds = choose_seeds(&self.region, &self.weights, self.config.districts, &mut rng)?;
        Ok(self.grow_and_validate(&seeds))
    }

    fn grow_and_validate(&self, seeds: &[usize]) -> AttemptResult {
        let bound = self.population_bound();
        let districts = Grower::new(&self.region, &self.weights, self.config.districts, bound).grow(seeds)?;
        validate(&self.region, &districts, self.config.districts, bound)?;
        Ok(districts)
    }

    /// Generate plans, handing each accepted plan to `writer` in attempt order.
    ///
    /// Fails if no plan is accepted within the attempt budget, or if the writer fails.
    pub fn run(&self, writer: &mut dyn PlanWriter) -> Result<RunSummary> {
        let master_seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        info!("[cluster::generator] master seed {master_seed}: {} districts, target {:.0}, bound {:.0}",
            self.config.districts, self.target_population(), self.population_bound());

        let mut seeder = StdRng::seed_from_u64(master_seed);
        let mut summary = RunSummary::new(master_seed);
        let batch_size = if self.config.parallel { self.config.batch_size } else { 1 };

        let mut next = 1;
        while next <= self.config.max_attempts && summary.accepted < self.config.target_plans {
            let batch = batch_size.min(self.config.max_attempts + 1 - next);
            let jobs = (next..next + batch)
                .map(|attempt| (attempt, seeder.random::<u64>()))
                .collect::<Vec<_>>();
            next += batch;

            let results = if self.config.parallel {
                jobs.into_par_iter().map(|(attempt, seed)| (attempt, seed, self.attempt(seed))).collect::<Vec<_>>()
            } else {
                jobs.into_iter().map(|(attempt, seed)| (attempt, seed, self.attempt(seed))).collect::<Vec<_>>()
            };

            for (attempt, seed, result) in results {
                // Later attempts in a parallel batch are discarded once the target is met.
                if summary.accepted >= self.config.target_plans { break }
                summary.attempts = attempt;

                match result? {
                    Ok(districts) => {
                        let plan = Plan::new(summary.accepted, attempt, seed, self.target_population(), districts);
                        writer.write_plan(&plan, &self.region)?;
                        summary.accepted += 1;
                        info!("[cluster::generator] saved plan {} (attempt {attempt}, seed {seed}, max deviation {:.2}%)",
                            summary.accepted, plan.max_abs_deviation() * 100.0);
                    }
                    Err(err) => {
                        debug!("[cluster::generator] attempt {attempt} rejected: {err}");
                        summary.record_rejection(&err);
                    }
                }
            }
        }

        if summary.accepted == 0 {
            bail!("[cluster::generator] No valid plans generated after {} attempts", summary.attempts);
        }

        writer.finish(&summary)?;
        info!("[cluster::generator] generated {} valid plans in {} attempts", summary.accepted, summary.attempts);
        Ok(summary)
    }
}
