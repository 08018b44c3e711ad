use ahash::AHashMap;

use crate::types::UnitId;

/// Undirected neighbor relation between unit identifiers.
///
/// Every neighbor list is sorted and free of duplicates, and the relation is
/// symmetric: if `a` lists `b`, then `b` lists `a`.
#[derive(Debug, Default, Clone)]
pub struct AdjacencyList {
    neighbors: AHashMap<UnitId, Vec<UnitId>>,
}

impl AdjacencyList {
    pub fn new() -> Self { Self::default() }

    /// Build an adjacency list from an iterator of undirected edges.
    pub fn from_edges(edges: impl IntoIterator<Item = (UnitId, UnitId)>) -> Self {
        let mut adjacency = Self::new();
        edges.into_iter().for_each(|(a, b)| adjacency.add_edge(a, b));
        adjacency
    }

    /// Insert an undirected edge. Self-loops and repeated edges are ignored.
    pub fn add_edge(&mut self, a: UnitId, b: UnitId) {
        if a == b { return }
        Self::insert_sorted(self.neighbors.entry(a.clone()).or_default(), b.clone());
        Self::insert_sorted(self.neighbors.entry(b).or_default(), a);
    }

    fn insert_sorted(list: &mut Vec<UnitId>, id: UnitId) {
        if let Err(pos) = list.binary_search(&id) { list.insert(pos, id) }
    }

    /// Neighbors of `id`, or `None` when `id` has no entry at all.
    #[inline]
    pub fn neighbors(&self, id: &str) -> Option<&[UnitId]> {
        self.neighbors.get(id).map(Vec::as_slice)
    }

    #[inline] pub fn contains(&self, id: &str) -> bool { self.neighbors.contains_key(id) }

    /// Number of identifiers with an entry.
    #[inline] pub fn len(&self) -> usize { self.neighbors.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.neighbors.is_empty() }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Iterate over all identifiers with an entry, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &UnitId> + '_ { self.neighbors.keys() }
}
