/// An unweighted, undirected graph over dense unit indices in compressed sparse row format.
///
/// A node may be unlisted: it exists (so indices stay dense) but had no adjacency
/// entry in the source data, which is distinct from being listed with no neighbors.
#[derive(Debug, Default, Clone)]
pub(crate) struct Graph {
    offsets: Vec<u32>,
    edges: Vec<u32>,
    listed: Vec<bool>,
}

impl Graph {
    /// Construct a graph from per-node adjacency lists and per-node listed flags.
    pub(crate) fn new(num_nodes: usize, edges: &[Vec<u32>], listed: Vec<bool>) -> Self {
        assert!(edges.len() == num_nodes, "edges.len() must equal num_nodes");
        assert!(listed.len() == num_nodes, "listed.len() must equal num_nodes");
        edges.iter().enumerate().for_each(|(i, edges)| {
            assert!(edges.iter().all(|&v| (v as usize) < num_nodes), "edges[{i}] references a node out of range");
        });

        Self {
            offsets: std::iter::once(0u32).chain(
                edges.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            edges: edges.iter().flatten().copied().collect(),
            listed,
        }
    }

    /// Get the number of nodes in the graph.
    #[inline] pub(crate) fn node_count(&self) -> usize { self.listed.len() }

    /// Get the number of directed edge entries (twice the undirected edge count).
    #[inline] pub(crate) fn edge_count(&self) -> usize { self.edges.len() }

    /// Whether the node had an adjacency entry in the source data.
    #[inline] pub(crate) fn is_listed(&self, node: usize) -> bool { self.listed[node] }

    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Get the degree (number of neighbors) of a given node.
    #[inline] pub(crate) fn degree(&self, node: usize) -> usize { self.range(node).len() }

    /// Get an iterator over the neighbors of a given node.
    #[inline]
    pub(crate) fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |v| self.edges[v] as usize)
    }
}
