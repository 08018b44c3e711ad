use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{cluster::RunSummary, plan::Plan};

/// Manifest entry describing one written plan.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct PlanRecord {
    id: usize,
    file: String,
    attempt: usize,
    seed: u64,
    district_populations: Vec<i64>,
    max_abs_deviation: f64,
}

impl PlanRecord {
    pub(crate) fn new(plan: &Plan, file: String) -> Self {
        Self {
            id: plan.id(),
            file,
            attempt: plan.attempt(),
            seed: plan.seed(),
            district_populations: plan.district_populations().into_iter().map(|p| p as i64).collect(),
            max_abs_deviation: plan.max_abs_deviation(),
        }
    }
}

/// Run-level record: statistics plus one entry per plan.
#[derive(Debug, Serialize)]
pub(crate) struct Manifest<'a> {
    pub summary: &'a RunSummary,
    pub plans: &'a [PlanRecord],
}

impl Manifest<'_> {
    pub(crate) fn write_to_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("[plan::io::manifest] Failed to create manifest: {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("[plan::io::manifest] Failed to write manifest: {}", path.display()))
    }
}
