//! Network topology module.
//!
//! This module contains the link model, the adjacency-list topology that
//! the analyses run on, the plain-text loader and a random generator.

pub mod generator;
pub mod graph;
pub mod link;
pub mod parser;

// Re-export key types and functions for easier access
pub use generator::{generate_topology, GeneratorOptions};
pub use graph::{Topology, TopologyError};
pub use link::{LinkId, Medium, UnknownMedium, WeightedLink, COPPER_SPEED, FIBER_SPEED};
pub use parser::{format_topology, parse_topology, parse_topology_file, ParseError};
