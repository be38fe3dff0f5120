//! Graph analyses over a [`Topology`](crate::topology::Topology).
//!
//! This module provides the lowest-latency path search, the minimum
//! spanning forest, single-medium connectivity and the two-vertex failure
//! check, plus the report types and writers shared by the CLI.

pub mod index_pq;
pub mod medium;
pub mod report;
pub mod robustness;
pub mod session;
pub mod shortest_path;
pub mod spanning_forest;
pub mod types;

pub use types::*;
pub use index_pq::{IndexMinPq, QueueError};
pub use medium::MediumConnectivity;
pub use robustness::RobustnessAnalyzer;
pub use session::Analyzer;
pub use shortest_path::ShortestPathTree;
pub use spanning_forest::MinimumSpanningForest;
pub use report::{generate_json_report, generate_text_report, print_summary};
