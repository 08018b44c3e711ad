use std::{fs::File, io::BufReader, path::Path};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::distance::FeatureWeights;

/// Settings for a plan-generation run. Every field has a default, so a JSON
/// config file only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of districts per plan.
    pub districts: usize,
    /// Attempt budget for the whole run.
    pub max_attempts: usize,
    /// Stop once this many plans have been accepted.
    pub target_plans: usize,
    /// Allowed excess over the target population, as a fraction.
    pub tolerance: f64,
    pub weights: FeatureWeights,
    /// Master seed. A random one is drawn (and logged) when absent.
    pub seed: Option<u64>,
    /// Evaluate attempts on the rayon thread pool.
    pub parallel: bool,
    /// Attempts evaluated per parallel batch.
    pub batch_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            districts: 14,
            max_attempts: 2000,
            target_plans: 50,
            tolerance: 0.05,
            weights: FeatureWeights::default(),
            seed: None,
            parallel: false,
            batch_size: 64,
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a JSON file.
    pub fn read_from_json(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[cluster::config] Failed to open config file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[cluster::config] Failed to parse config file: {}", path.display()))
    }

    /// Reject settings the generator cannot run with.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.districts > 0, "[cluster::config] districts must be at least 1");
        ensure!(self.target_plans > 0, "[cluster::config] target_plans must be at least 1");
        ensure!(self.batch_size > 0, "[cluster::config] batch_size must be at least 1");
        ensure!(self.tolerance.is_finite() && self.tolerance >= 0.0,
            "[cluster::config] tolerance must be a non-negative number, got {}", self.tolerance);

        let FeatureWeights { race, food, wages } = self.weights;
        ensure!([race, food, wages].iter().all(|w| w.is_finite() && *w >= 0.0),
            "[cluster::config] weights must be non-negative numbers, got race={race} food={food} wages={wages}");

        Ok(())
    }

    /// Largest population a district may reach for the given target.
    #[inline]
    pub fn population_bound(&self, target: f64) -> f64 { target * (1.0 + self.tolerance) }
}
