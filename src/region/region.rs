use std::collections::BTreeSet;

use ahash::AHashMap;
use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::{
    graph::{AdjacencyList, Graph},
    types::UnitId,
    units::{Profile, Unit, UnitTable},
};

/// Read-only working set shared by every attempt: the unit table, the adjacency
/// graph over dense unit indices, precomputed unit profiles and interned base keys.
#[derive(Clone, Debug)]
pub struct Region {
    units: UnitTable,
    graph: Graph,
    profiles: Vec<Profile>,
    bases: Vec<u32>,
    base_names: Vec<UnitId>,
}

impl Region {
    /// Index the unit table against an adjacency list.
    ///
    /// Neighbors that are not in the unit table are dropped, and units without an
    /// adjacency entry are kept but flagged; both are logged.
    pub fn new(units: UnitTable, adjacency: &AdjacencyList) -> Result<Self> {
        let mut unknown = BTreeSet::new();
        let mut unlisted = Vec::new();

        let (edges, listed): (Vec<Vec<u32>>, Vec<bool>) = units.iter()
            .map(|unit| match adjacency.neighbors(unit.id().as_str()) {
                Some(neighbors) => {
                    let edges = neighbors.iter()
                        .filter_map(|id| {
                            let index = units.index_of(id.as_str());
                            if index.is_none() { unknown.insert(id.clone()); }
                            index.map(|i| i as u32)
                        })
                        .collect();
                    (edges, true)
                }
                None => {
                    unlisted.push(unit.id().clone());
                    (Vec::new(), false)
                }
            })
            .unzip();

        for id in &unknown {
            warn!("[region] adjacency entry '{id}' has no matching unit, ignoring its edges");
        }
        for id in &unlisted {
            warn!("[region] unit '{id}' has no adjacency entry");
        }

        let profiles = units.iter()
            .map(|unit| unit.profile()
                .with_context(|| format!("[region] Unit '{}' has no population to profile", unit.id())))
            .collect::<Result<Vec<_>>>()?;

        let (bases, base_names) = {
            let mut interned = AHashMap::<&str, u32>::new();
            let mut base_names = Vec::new();
            let bases = units.iter()
                .map(|unit| *interned.entry(unit.id().base()).or_insert_with(|| {
                    base_names.push(UnitId::from_normalized(unit.id().base()));
                    (base_names.len() - 1) as u32
                }))
                .collect::<Vec<_>>();
            (bases, base_names)
        };

        let graph = Graph::new(units.len(), &edges, listed);
        debug!("[region] indexed {} units with {} adjacencies", graph.node_count(), graph.edge_count() / 2);

        Ok(Self { units, graph, profiles, bases, base_names })
    }

    /// Number of units.
    #[inline] pub fn len(&self) -> usize { self.units.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.units.is_empty() }

    #[inline] pub fn units(&self) -> &UnitTable { &self.units }

    #[inline] pub fn unit(&self, index: usize) -> &Unit { self.units.unit(index) }

    /// Number of undirected adjacencies between units.
    #[inline] pub fn edge_count(&self) -> usize { self.graph.edge_count() / 2 }

    /// Number of neighbors of a unit.
    #[inline] pub fn degree(&self, index: usize) -> usize { self.graph.degree(index) }

    /// Precomputed per-capita profile of a unit.
    #[inline] pub fn profile(&self, index: usize) -> &Profile { &self.profiles[index] }

    #[inline] pub fn profiles(&self) -> &[Profile] { &self.profiles }

    /// Interned base key of a unit.
    #[inline] pub fn base(&self, index: usize) -> u32 { self.bases[index] }

    /// Identifier of an interned base key.
    #[inline] pub fn base_name(&self, base: u32) -> &UnitId { &self.base_names[base as usize] }

    /// Number of distinct base units.
    #[inline] pub fn base_count(&self) -> usize { self.base_names.len() }

    /// Neighbors of a unit by dense index.
    #[inline]
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ { self.graph.edges(index) }

    /// Whether the unit had an adjacency entry.
    #[inline] pub fn has_adjacency(&self, index: usize) -> bool { self.graph.is_listed(index) }

    /// Indices of units without an adjacency entry.
    pub fn unlisted_units(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&i| !self.graph.is_listed(i))
    }

    #[inline] pub fn total_population(&self) -> f64 { self.units.total_population() }

    /// Ideal district population for `num_districts` districts.
    #[inline]
    pub fn target_population(&self, num_districts: usize) -> f64 {
        self.total_population() / num_districts as f64
    }
}
