use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, prelude::NamedFrom, series::Series};

use crate::{
    cluster::RunSummary,
    io::csv::write_csv_sections,
    plan::{io::manifest::{Manifest, PlanRecord}, Plan, PlanWriter},
    region::Region,
};

/// Writes each plan to `plan_<id>.csv` in a directory, then a `plans.json` manifest.
#[derive(Debug)]
pub struct CsvPlanWriter {
    dir: PathBuf,
    records: Vec<PlanRecord>,
}

impl CsvPlanWriter {
    /// Create the writer, creating `dir` if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if dir.exists() {
            anyhow::ensure!(dir.is_dir(), "[plan::io::csv] Path exists but is not a directory: {}", dir.display());
        } else {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("[plan::io::csv] Failed to create directory {}", dir.display()))?;
        }
        Ok(Self { dir, records: Vec::new() })
    }

    #[inline] pub fn dir(&self) -> &Path { &self.dir }

    /// Path of the CSV file for a plan id.
    pub fn plan_path(&self, id: usize) -> PathBuf { self.dir.join(format!("plan_{id}.csv")) }

    /// Path of the run manifest.
    pub fn manifest_path(&self) -> PathBuf { self.dir.join("plans.json") }
}

impl Plan {
    /// Per-district totals: `district,total_population`, truncated to integers.
    pub(crate) fn totals_frame(&self) -> Result<DataFrame> {
        let (districts, populations) = self.districts().iter().enumerate()
            .map(|(d, district)| (d as u32, district.population() as i64))
            .unzip::<_, _, Vec<_>, Vec<_>>();

        Ok(DataFrame::new(vec![
            Series::new("district".into(), districts).into(),
            Series::new("total_population".into(), populations).into(),
        ])?)
    }

    /// Per-member rows: `district,county,county_population`, truncated to integers.
    pub(crate) fn members_frame(&self, region: &Region) -> Result<DataFrame> {
        let mut districts = Vec::new();
        let mut names = Vec::new();
        let mut populations = Vec::new();

        for (d, district) in self.districts().iter().enumerate() {
            for &unit in district.members() {
                let unit = region.unit(unit);
                districts.push(d as u32);
                names.push(unit.id().to_string());
                populations.push(unit.population() as i64);
            }
        }

        Ok(DataFrame::new(vec![
            Series::new("district".into(), districts).into(),
            Series::new("county".into(), names).into(),
            Series::new("county_population".into(), populations).into(),
        ])?)
    }
}

impl PlanWriter for CsvPlanWriter {
    fn write_plan(&mut self, plan: &Plan, region: &Region) -> Result<()> {
        let path = self.plan_path(plan.id());
        write_csv_sections(&mut [plan.totals_frame()?, plan.members_frame(region)?], &path)?;
        self.records.push(PlanRecord::new(plan, path.file_name().map(|f| f.to_string_lossy().into_owned()).unwrap_or_default()));
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        Manifest { summary, plans: &self.records }.write_to_json(&self.manifest_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cluster::{Generator, GeneratorConfig},
        distance::Stdevs,
        graph::AdjacencyList,
        types::UnitId,
        units::{Demographics, Unit, UnitTable},
    };

    fn region() -> Region {
        let units = [("a", 100.7, 0.1), ("b", 99.2, 0.1), ("c", 100.0, 0.9), ("d", 100.0, 0.9)].iter()
            .map(|&(name, population, hispanic)| {
                Unit::new(UnitId::new(name), population, Demographics { hispanic: hispanic * population, ..Default::default() })
            })
            .collect();
        let edges = [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")].map(|(a, b)| (UnitId::new(a), UnitId::new(b)));
        Region::new(UnitTable::new(units).unwrap(), &AdjacencyList::from_edges(edges)).unwrap()
    }

    #[test]
    fn writes_plan_files_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let region = region();
        let stdev = Stdevs::from_profiles(region.profiles());
        let config = GeneratorConfig { districts: 2, tolerance: 0.5, target_plans: 2, max_attempts: 5, seed: Some(1), ..Default::default() };
        let generator = Generator::new(region, stdev, config).unwrap();

        let mut writer = CsvPlanWriter::new(dir.path().join("plans")).unwrap();
        let summary = generator.run(&mut writer).unwrap();
        assert_eq!(summary.accepted, 2);

        let text = std::fs::read_to_string(writer.plan_path(0)).unwrap();
        let (totals, members) = text.split_once("\n\n").unwrap();

        let mut totals = totals.lines();
        assert_eq!(totals.next(), Some("district,total_population"));
        let mut rows = totals.collect::<Vec<_>>();
        rows.sort();
        // {a, b} sums to 199.9 and truncates; {c, d} is exactly 200.
        assert!(rows == vec!["0,199", "1,200"] || rows == vec!["0,200", "1,199"], "{rows:?}");

        let mut members = members.lines();
        assert_eq!(members.next(), Some("district,county,county_population"));
        let mut rows = members.map(|line| line.split(',').skip(1).collect::<Vec<_>>().join(",")).collect::<Vec<_>>();
        rows.sort();
        assert_eq!(rows, vec!["a,100", "b,99", "c,100", "d,100"]);

        let manifest: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(writer.manifest_path()).unwrap()).unwrap();
        assert_eq!(manifest["summary"]["master_seed"], 1);
        assert_eq!(manifest["summary"]["accepted"], 2);
        assert_eq!(manifest["plans"].as_array().unwrap().len(), 2);
        assert_eq!(manifest["plans"][1]["file"], "plan_1.csv");
        assert!(manifest["plans"][0]["seed"].is_u64());
    }

    #[test]
    fn refuses_a_file_as_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        std::fs::write(&file, "x").unwrap();
        assert!(CsvPlanWriter::new(&file).is_err());
    }
}
