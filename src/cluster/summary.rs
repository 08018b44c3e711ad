use std::collections::BTreeMap;

use serde::Serialize;

use crate::cluster::AttemptError;

/// Outcome statistics of a generation run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RunSummary {
    /// Master seed that produced every attempt seed.
    pub master_seed: u64,
    /// Attempts consumed, including the one that produced the last accepted plan.
    pub attempts: usize,
    pub accepted: usize,
    /// Rejected attempts, tallied by `AttemptError::kind`.
    pub rejections: BTreeMap<String, usize>,
}

impl RunSummary {
    pub(crate) fn new(master_seed: u64) -> Self {
        Self { master_seed, ..Default::default() }
    }

    pub(crate) fn record_rejection(&mut self, error: &AttemptError) {
        *self.rejections.entry(error.kind().to_string()).or_default() += 1;
    }

    /// Total number of rejected attempts.
    pub fn rejected(&self) -> usize { self.rejections.values().sum() }
}
