//! Lowest-latency paths with bottleneck tracking.
//!
//! Dijkstra's algorithm from a single source, extended so that each
//! relaxation also carries the path that produced the new distance and the
//! smallest bandwidth along it. Weights are strictly positive (derived from
//! positive lengths and speeds), so a vertex is final once extracted.

use log::debug;

use super::index_pq::IndexMinPq;
use super::types::ShortestPath;
use crate::topology::{LinkId, Topology, TopologyError, WeightedLink};

/// Shortest paths from one source vertex to every other vertex
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'a> {
    topology: &'a Topology,
    source: usize,
    dist_to: Vec<f64>,
    // last link of the best known path to each vertex
    edge_to: Vec<Option<LinkId>>,
    // minimum bandwidth along that path; None = unbounded
    bottleneck: Vec<Option<u32>>,
}

impl<'a> ShortestPathTree<'a> {
    /// Run Dijkstra from `source` over `topology`
    pub fn new(topology: &'a Topology, source: usize) -> Result<Self, TopologyError> {
        topology.check_vertex(source)?;

        let n = topology.vertex_count();
        let mut tree = Self {
            topology,
            source,
            dist_to: vec![f64::INFINITY; n],
            edge_to: vec![None; n],
            bottleneck: vec![None; n],
        };
        tree.dist_to[source] = 0.0;

        let mut pq = IndexMinPq::with_capacity(n);
        pq.insert(source, 0.0)?;

        while let Some(v) = pq.extract_min() {
            for (id, link) in topology.incident_links(v) {
                tree.relax(&mut pq, v, id, link)?;
            }
        }

        debug!(
            "Shortest path tree from vertex {} reaches {} of {} vertices",
            source,
            tree.dist_to.iter().filter(|d| d.is_finite()).count(),
            n
        );
        Ok(tree)
    }

    fn relax(
        &mut self,
        pq: &mut IndexMinPq<f64>,
        v: usize,
        id: LinkId,
        link: &WeightedLink,
    ) -> Result<(), TopologyError> {
        let w = link.other(v);
        let candidate = self.dist_to[v] + link.weight();
        if candidate < self.dist_to[w] {
            self.dist_to[w] = candidate;
            // The path to w becomes the settled path to v followed by this link
            self.edge_to[w] = Some(id);
            self.bottleneck[w] = Some(match self.bottleneck[v] {
                Some(b) => b.min(link.bandwidth()),
                None => link.bandwidth(),
            });
            pq.insert_or_decrease(w, candidate)?;
        }
        Ok(())
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.dist_to.len()
    }

    /// Latency of the best path to `v`; infinite when unreachable
    pub fn dist_to(&self, v: usize) -> f64 {
        self.dist_to[v]
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to[v] < f64::INFINITY
    }

    /// Smallest bandwidth along the path to `v`.
    ///
    /// `None` for the source itself (empty path, unbounded bandwidth) and for
    /// unreachable vertices.
    pub fn bottleneck(&self, v: usize) -> Option<u32> {
        self.bottleneck[v]
    }

    /// Links from the source to `v`, oriented in walking order.
    ///
    /// Empty for the source and for unreachable vertices.
    pub fn path_to(&self, v: usize) -> Vec<WeightedLink> {
        let mut path = Vec::new();
        let mut current = v;
        while let Some(id) = self.edge_to[current] {
            let link = self.topology.link(id);
            let previous = link.other(current);
            path.push(link.oriented_from(previous));
            current = previous;
        }
        path.reverse();
        path
    }

    /// Query result for `target`
    pub fn path(&self, target: usize) -> Result<ShortestPath, TopologyError> {
        if target >= self.vertex_count() {
            return Err(TopologyError::InvalidVertex {
                vertex: target,
                vertex_count: self.vertex_count(),
            });
        }

        Ok(ShortestPath {
            source: self.source,
            target,
            exists: self.has_path_to(target),
            links: self.path_to(target),
            distance: self.dist_to[target],
            bottleneck_bandwidth: self.bottleneck[target],
        })
    }
}
