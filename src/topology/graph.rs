//! Topology storage and query surface.
//!
//! Links live in a single arena and every vertex keeps an ordered list of
//! the arena indices touching it. Adjacency order is insertion order, which
//! decides every tie-break in the analyses.

use log::debug;

use super::link::{LinkId, Medium, WeightedLink};
use crate::analysis::index_pq::QueueError;
use crate::analysis::{
    MediumConnectivity, MinimumSpanningForest, RobustnessAnalyzer, RobustnessReport,
    ShortestPath, ShortestPathTree, SpanningForestSummary,
};

/// Errors raised by topology construction and queries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("Vertex {vertex} is out of range (topology has {vertex_count} vertices)")]
    InvalidVertex { vertex: usize, vertex_count: usize },
    #[error(transparent)]
    Queue(#[from] QueueError),
}

/// An undirected network of sites connected by copper and fiber links
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    vertex_count: usize,
    links: Vec<WeightedLink>,
    adjacency: Vec<Vec<LinkId>>,
}

impl Topology {
    /// Create a topology with `vertex_count` isolated vertices
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            links: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Build a topology from a list of links
    pub fn from_links<I>(vertex_count: usize, links: I) -> Result<Self, TopologyError>
    where
        I: IntoIterator<Item = WeightedLink>,
    {
        let mut topology = Self::new(vertex_count);
        for link in links {
            topology.add_link(link)?;
        }
        Ok(topology)
    }

    /// Add a link, registering it with both endpoints (once for a self-loop)
    pub fn add_link(&mut self, link: WeightedLink) -> Result<LinkId, TopologyError> {
        self.check_vertex(link.from())?;
        self.check_vertex(link.to())?;

        let id = self.links.len();
        self.adjacency[link.from()].push(id);
        if link.from() != link.to() {
            self.adjacency[link.to()].push(id);
        }
        self.links.push(link);
        Ok(id)
    }

    /// Convenience wrapper around [`Topology::add_link`]
    pub fn connect(
        &mut self,
        from: usize,
        to: usize,
        medium: Medium,
        bandwidth: u32,
        length: f64,
    ) -> Result<LinkId, TopologyError> {
        self.add_link(WeightedLink::new(from, to, medium, bandwidth, length))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn link(&self, id: LinkId) -> &WeightedLink {
        &self.links[id]
    }

    pub fn links(&self) -> &[WeightedLink] {
        &self.links
    }

    /// Arena indices of the links touching `vertex`, in insertion order
    pub fn adjacent(&self, vertex: usize) -> &[LinkId] {
        &self.adjacency[vertex]
    }

    /// Iterate the links touching `vertex`, in insertion order
    pub fn incident_links(&self, vertex: usize) -> impl Iterator<Item = (LinkId, &WeightedLink)> + '_ {
        self.adjacency[vertex]
            .iter()
            .map(move |&id| (id, &self.links[id]))
    }

    /// Number of link endpoints at `vertex` (a self-loop counts once)
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }

    pub fn check_vertex(&self, vertex: usize) -> Result<(), TopologyError> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(TopologyError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Single-source shortest path tree rooted at `source`
    pub fn shortest_path_tree(&self, source: usize) -> Result<ShortestPathTree<'_>, TopologyError> {
        ShortestPathTree::new(self, source)
    }

    /// Lowest-latency path between two vertices with its bottleneck bandwidth
    pub fn shortest_path(&self, source: usize, target: usize) -> Result<ShortestPath, TopologyError> {
        self.check_vertex(target)?;
        let tree = self.shortest_path_tree(source)?;
        tree.path(target)
    }

    /// True if links of `medium` alone connect every vertex
    pub fn is_medium_connected(&self, medium: Medium) -> bool {
        MediumConnectivity::new(self, medium).is_connected()
    }

    /// Minimum-latency spanning forest
    pub fn minimum_spanning_forest(&self) -> Result<SpanningForestSummary, TopologyError> {
        Ok(MinimumSpanningForest::new(self)?.summary())
    }

    /// Detailed two-vertex failure analysis
    pub fn robustness(&self) -> RobustnessReport {
        RobustnessAnalyzer::new(self).report()
    }

    /// True if the network stays connected after any two vertices fail
    pub fn is_robust_to_double_failure(&self) -> bool {
        let robust = self.robustness().robust;
        debug!("Double-failure robustness for {} vertices: {}", self.vertex_count, robust);
        robust
    }
}
