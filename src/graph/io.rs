use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::{graph::AdjacencyList, io::csv::{read_csv, str_column}, types::UnitId};

impl AdjacencyList {
    /// Load an edge list CSV (header row, unit names in the first two columns).
    pub fn read_from_csv(path: &Path) -> Result<Self> {
        let df = read_csv(path)?;
        let (left, right) = (str_column(&df, 0)?, str_column(&df, 1)?);

        let mut adjacency = Self::new();
        for (row, (a, b)) in left.into_iter().zip(right).enumerate() {
            let (Some(a), Some(b)) = (a, b) else {
                warn!("[graph::io] {}: row {} is missing an endpoint, skipping", path.display(), row + 1);
                continue
            };
            let (a, b) = (UnitId::new(a), UnitId::new(b));
            if a.as_str().is_empty() || b.as_str().is_empty() {
                warn!("[graph::io] {}: row {} has an empty unit name, skipping", path.display(), row + 1);
                continue
            }
            adjacency.add_edge(a, b);
        }

        debug!("[graph::io] loaded {} units and {} edges from {}", adjacency.len(), adjacency.edge_count(), path.display());
        Ok(adjacency)
    }
}

/// Convenience wrapper that names the file in the error chain.
pub fn read_adjacency(path: &Path) -> Result<AdjacencyList> {
    AdjacencyList::read_from_csv(path)
        .with_context(|| format!("[graph::io] Failed to load adjacency list from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs::File, io::Write};

    #[test]
    fn reads_and_normalizes_edge_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "county_a,county_b").unwrap();
        writeln!(file, "Adams County,Clay County").unwrap();
        writeln!(file, "Clay County,Adams County").unwrap();
        writeln!(file, "Adams County,Hall County").unwrap();
        writeln!(file, "Hall County,Hall County").unwrap();
        drop(file);

        let adjacency = read_adjacency(&path).unwrap();
        assert_eq!(adjacency.len(), 3);
        assert_eq!(adjacency.edge_count(), 2);
        assert_eq!(adjacency.neighbors("adams").unwrap(), &[UnitId::new("clay"), UnitId::new("hall")]);
    }
}
