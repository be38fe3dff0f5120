//! Result types returned by the analyses and collected into reports.

use serde::Serialize;

use crate::topology::{Medium, WeightedLink};

/// Lowest-latency path between two vertices
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPath {
    pub source: usize,
    pub target: usize,
    /// False when the target cannot be reached from the source
    pub exists: bool,
    /// Links in walking order from source to target
    pub links: Vec<WeightedLink>,
    /// Total latency in units of 10^-7 s; infinite when no path exists
    pub distance: f64,
    /// Smallest bandwidth along the path in Mbit/s.
    /// `None` means unbounded (source == target) or no path.
    pub bottleneck_bandwidth: Option<u32>,
}

impl ShortestPath {
    /// True for the degenerate query of a vertex against itself
    pub fn is_trivial(&self) -> bool {
        self.source == self.target
    }
}

/// Minimum spanning forest edges and their total latency
#[derive(Debug, Clone, Serialize)]
pub struct SpanningForestSummary {
    /// Parent links in ascending order of the child vertex
    pub edges: Vec<WeightedLink>,
    pub total_weight: f64,
    /// Number of trees in the forest (one per connected component)
    pub tree_count: usize,
}

/// Outcome of the single-medium connectivity check
#[derive(Debug, Clone, Serialize)]
pub struct MediumConnectivityReport {
    pub medium: Medium,
    pub connected: bool,
    pub reached_vertices: usize,
    pub total_vertices: usize,
}

/// Two vertices whose joint failure disconnects the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FailurePair {
    /// The vertex excluded for the trial
    pub excluded: usize,
    /// The vertex whose additional failure splits the remainder
    pub critical: usize,
}

/// Outcome of the two-vertex failure analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobustnessReport {
    pub robust: bool,
    /// First failing pair found, if the network is not robust
    pub failing_pair: Option<FailurePair>,
    /// Number of single-vertex exclusion trials that were run
    pub trials: usize,
}

/// Metadata attached to a full report
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: String,
    pub topology_source: String,
    pub vertex_count: usize,
    pub link_count: usize,
}

/// All query results gathered for one topology
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub shortest_paths: Vec<ShortestPath>,
    pub medium_connectivity: Vec<MediumConnectivityReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spanning_forest: Option<SpanningForestSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robustness: Option<RobustnessReport>,
}
