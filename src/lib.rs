//! # netanalysis - Latency, bandwidth and resilience analysis for link networks
//!
//! This library loads an undirected network of sites joined by copper and
//! fiber links and answers questions about it.
//!
//! ## Key Features
//!
//! - **Lowest-latency paths**: Dijkstra search that also reports the smallest
//!   bandwidth along the chosen path
//! - **Spanning forest**: Prim's minimum-latency spanning forest over every
//!   connected component
//! - **Single-medium connectivity**: whether the network stays connected
//!   using copper links (or fiber links) only
//! - **Two-vertex failures**: whether any two sites can fail without
//!   splitting the rest of the network
//!
//! ## Architecture
//!
//! - `topology`: link model, adjacency-list topology, text loader, generator
//! - `analysis`: indexed priority queue, the analyses, report types and writers
//! - `config`: YAML batch configuration structures
//! - `config_loader`: configuration file loading
//! - `orchestrator`: runs configured queries and writes reports
//! - `interactive`: menu-driven prompt loop
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use netanalysis::topology::parse_topology_file;
//!
//! let topology = parse_topology_file(Path::new("network.txt"))?;
//! let path = topology.shortest_path(0, 3)?;
//! println!("latency {}E-7 s over {} links", path.distance, path.links.len());
//! println!("robust: {}", topology.is_robust_to_double_failure());
//! # Ok::<(), color_eyre::Report>(())
//! ```
//!
//! ## Topology Format
//!
//! ```text
//! 4
//! 0 1 copper 1000 23
//! 1 2 fiber 500 20
//! 2 3 copper 800 46
//! 0 3 fiber 300 40
//! ```
//!
//! The first line is the vertex count, each further line one link as
//! `from to medium bandwidth(Mbit/s) length(m)`.

pub mod analysis;
pub mod config;
pub mod config_loader;
pub mod interactive;
pub mod orchestrator;
pub mod topology;

pub use analysis::Analyzer;
pub use config::Config;
pub use topology::{Medium, Topology, TopologyError, WeightedLink};
