use anyhow::Result;

use crate::{cluster::RunSummary, plan::Plan, region::Region};

/// Sink for accepted plans.
pub trait PlanWriter {
    /// Persist one accepted plan.
    fn write_plan(&mut self, plan: &Plan, region: &Region) -> Result<()>;

    /// Called once after the last plan of a successful run.
    fn finish(&mut self, _summary: &RunSummary) -> Result<()> { Ok(()) }
}

/// Collects plans in memory.
impl PlanWriter for Vec<Plan> {
    fn write_plan(&mut self, plan: &Plan, _region: &Region) -> Result<()> {
        self.push(plan.clone());
        Ok(())
    }
}
