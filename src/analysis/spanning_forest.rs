//! Minimum spanning forest.
//!
//! Prim's algorithm (eager variant over the indexed priority queue), started
//! again from every vertex not yet covered, so a disconnected topology yields
//! one tree per component instead of an error.

use log::debug;

use super::index_pq::IndexMinPq;
use super::types::SpanningForestSummary;
use crate::topology::{LinkId, Topology, TopologyError, WeightedLink};

/// Minimum-latency spanning forest of a topology
#[derive(Debug, Clone)]
pub struct MinimumSpanningForest<'a> {
    topology: &'a Topology,
    // shortest link from the tree to each vertex; None for roots
    edge_to: Vec<Option<LinkId>>,
    dist_to: Vec<f64>,
    marked: Vec<bool>,
    roots: Vec<usize>,
}

impl<'a> MinimumSpanningForest<'a> {
    pub fn new(topology: &'a Topology) -> Result<Self, TopologyError> {
        let n = topology.vertex_count();
        let mut forest = Self {
            topology,
            edge_to: vec![None; n],
            dist_to: vec![f64::INFINITY; n],
            marked: vec![false; n],
            roots: Vec::new(),
        };

        let mut pq = IndexMinPq::with_capacity(n);
        for v in 0..n {
            if !forest.marked[v] {
                forest.prim(&mut pq, v)?;
            }
        }

        debug!(
            "Spanning forest over {} vertices: {} trees, total weight {}",
            n,
            forest.roots.len(),
            forest.weight()
        );
        Ok(forest)
    }

    fn prim(&mut self, pq: &mut IndexMinPq<f64>, root: usize) -> Result<(), TopologyError> {
        self.roots.push(root);
        self.dist_to[root] = 0.0;
        pq.insert(root, 0.0)?;
        while let Some(v) = pq.extract_min() {
            self.scan(pq, v)?;
        }
        Ok(())
    }

    fn scan(&mut self, pq: &mut IndexMinPq<f64>, v: usize) -> Result<(), TopologyError> {
        self.marked[v] = true;
        for (id, link) in self.topology.incident_links(v) {
            let w = link.other(v);
            if self.marked[w] {
                continue;
            }
            if link.weight() < self.dist_to[w] {
                self.dist_to[w] = link.weight();
                self.edge_to[w] = Some(id);
                pq.insert_or_decrease(w, link.weight())?;
            }
        }
        Ok(())
    }

    /// Forest links, in ascending order of the vertex they attach
    pub fn edges(&self) -> Vec<WeightedLink> {
        self.edge_to
            .iter()
            .flatten()
            .map(|&id| self.topology.link(id).clone())
            .collect()
    }

    /// Sum of the forest link weights
    pub fn weight(&self) -> f64 {
        self.edge_to
            .iter()
            .flatten()
            .map(|&id| self.topology.link(id).weight())
            .sum()
    }

    /// Parent link of `v`, or `None` if `v` is a root
    pub fn parent_link(&self, v: usize) -> Option<&WeightedLink> {
        self.edge_to[v].map(|id| self.topology.link(id))
    }

    /// First vertex of each tree, in discovery order
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn summary(&self) -> SpanningForestSummary {
        SpanningForestSummary {
            edges: self.edges(),
            total_weight: self.weight(),
            tree_count: self.roots.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Medium;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_complete_graph_with_distinct_weights() {
        // copper lengths chosen so weights are 1..=6
        let mut topology = Topology::new(4);
        topology.connect(0, 1, Medium::Copper, 100, 23.0).unwrap(); // 1
        topology.connect(0, 2, Medium::Copper, 100, 92.0).unwrap(); // 4
        topology.connect(0, 3, Medium::Copper, 100, 69.0).unwrap(); // 3
        topology.connect(1, 2, Medium::Copper, 100, 46.0).unwrap(); // 2
        topology.connect(1, 3, Medium::Copper, 100, 115.0).unwrap(); // 5
        topology.connect(2, 3, Medium::Copper, 100, 138.0).unwrap(); // 6

        let forest = MinimumSpanningForest::new(&topology).unwrap();

        assert!(close(forest.weight(), 6.0));
        let endpoints: Vec<(usize, usize)> =
            forest.edges().iter().map(|l| (l.from(), l.to())).collect();
        assert_eq!(endpoints, vec![(0, 1), (1, 2), (0, 3)]);
        assert_eq!(forest.roots(), &[0]);
        assert!(forest.parent_link(0).is_none());
    }

    #[test]
    fn test_disconnected_topology_yields_forest() {
        let mut topology = Topology::new(5);
        topology.connect(0, 1, Medium::Fiber, 10, 20.0).unwrap();
        topology.connect(2, 3, Medium::Fiber, 10, 40.0).unwrap();
        topology.connect(3, 4, Medium::Copper, 10, 23.0).unwrap();
        topology.connect(2, 4, Medium::Copper, 10, 230.0).unwrap();

        let summary = MinimumSpanningForest::new(&topology).unwrap().summary();

        assert_eq!(summary.tree_count, 2);
        assert_eq!(summary.edges.len(), 3);
        assert!(close(summary.total_weight, 1.0 + 2.0 + 1.0));
    }

    #[test]
    fn test_isolated_vertices_are_roots() {
        let topology = Topology::new(3);
        let forest = MinimumSpanningForest::new(&topology).unwrap();

        assert!(forest.edges().is_empty());
        assert_eq!(forest.weight(), 0.0);
        assert_eq!(forest.roots(), &[0, 1, 2]);
    }

    #[test]
    fn test_parallel_links_and_self_loops() {
        let mut topology = Topology::new(2);
        topology.connect(0, 0, Medium::Copper, 10, 1.0).unwrap();
        topology.connect(0, 1, Medium::Copper, 10, 230.0).unwrap();
        topology.connect(0, 1, Medium::Fiber, 10, 20.0).unwrap();

        let forest = MinimumSpanningForest::new(&topology).unwrap();

        assert!(close(forest.weight(), 1.0));
        assert_eq!(forest.parent_link(1).map(|l| l.medium()), Some(Medium::Fiber));
    }
}
