//! Lazily evaluated analyses over one topology.
//!
//! Each facility is built the first time it is asked for and kept for later
//! queries. Shortest path trees are kept only for the most recent source.

use std::cell::OnceCell;
use std::collections::HashMap;

use log::debug;

use super::medium::MediumConnectivity;
use super::robustness::RobustnessAnalyzer;
use super::shortest_path::ShortestPathTree;
use super::spanning_forest::MinimumSpanningForest;
use super::types::{MediumConnectivityReport, RobustnessReport, ShortestPath, SpanningForestSummary};
use crate::topology::{Medium, Topology, TopologyError};

/// Caches analysis results for a borrowed topology
pub struct Analyzer<'a> {
    topology: &'a Topology,
    last_tree: Option<ShortestPathTree<'a>>,
    forest: OnceCell<MinimumSpanningForest<'a>>,
    robustness: OnceCell<RobustnessAnalyzer>,
    medium: HashMap<Medium, MediumConnectivity>,
}

impl<'a> Analyzer<'a> {
    pub fn new(topology: &'a Topology) -> Self {
        Self {
            topology,
            last_tree: None,
            forest: OnceCell::new(),
            robustness: OnceCell::new(),
            medium: HashMap::new(),
        }
    }

    pub fn topology(&self) -> &'a Topology {
        self.topology
    }

    /// Shortest path, reusing the tree of the previous query when the
    /// source is unchanged
    pub fn shortest_path(&mut self, source: usize, target: usize) -> Result<ShortestPath, TopologyError> {
        self.topology.check_vertex(target)?;

        let tree = match self.last_tree.take() {
            Some(tree) if tree.source() == source => tree,
            _ => {
                debug!("Building shortest path tree for source {}", source);
                ShortestPathTree::new(self.topology, source)?
            }
        };
        let result = tree.path(target);
        self.last_tree = Some(tree);
        result
    }

    pub fn medium_connectivity(&mut self, medium: Medium) -> MediumConnectivityReport {
        let topology = self.topology;
        self.medium
            .entry(medium)
            .or_insert_with(|| MediumConnectivity::new(topology, medium))
            .report()
    }

    pub fn is_medium_connected(&mut self, medium: Medium) -> bool {
        self.medium_connectivity(medium).connected
    }

    pub fn spanning_forest(&self) -> Result<SpanningForestSummary, TopologyError> {
        if let Some(forest) = self.forest.get() {
            return Ok(forest.summary());
        }
        let forest = MinimumSpanningForest::new(self.topology)?;
        let summary = forest.summary();
        let _ = self.forest.set(forest);
        Ok(summary)
    }

    pub fn robustness(&self) -> RobustnessReport {
        self.robustness
            .get_or_init(|| RobustnessAnalyzer::new(self.topology))
            .report()
    }
}
