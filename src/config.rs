//! Batch analysis configuration.
//!
//! A YAML file names the topology to load and the queries to run against
//! it. When no queries are listed every analysis runs with its defaults.

use serde::{Deserialize, Serialize};

use crate::topology::{Medium, Topology};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    pub topology: TopologyConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<Query>>,
}

/// Shared general configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GeneralConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Directory for `report` output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

/// Location of the topology description
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TopologyConfig {
    pub path: String,
}

fn default_medium() -> Medium {
    Medium::Copper
}

/// One analysis to run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// Lowest-latency path between two vertices
    ShortestPath { from: usize, to: usize },
    /// Connectivity using a single link medium
    MediumConnected {
        #[serde(default = "default_medium")]
        medium: Medium,
    },
    /// Minimum-latency spanning forest
    SpanningForest,
    /// Tolerance to any two simultaneous vertex failures
    Robustness,
}

impl Query {
    /// Queries run when a configuration does not list any
    pub fn defaults() -> Vec<Query> {
        vec![
            Query::MediumConnected { medium: Medium::Copper },
            Query::SpanningForest,
            Query::Robustness,
        ]
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid general configuration: {0}")]
    InvalidGeneral(String),
    #[error("Invalid topology configuration: {0}")]
    InvalidTopology(String),
    #[error("Invalid query configuration: {0}")]
    InvalidQuery(String),
}

impl Config {
    /// Validate settings that do not depend on the loaded topology
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(level) = &self.general.log_level {
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(ValidationError::InvalidGeneral(format!(
                    "log_level '{}' must be one of {}",
                    level,
                    LOG_LEVELS.join(", ")
                )));
            }
        }

        if self.topology.path.trim().is_empty() {
            return Err(ValidationError::InvalidTopology(
                "topology path cannot be empty".to_string(),
            ));
        }

        if let Some(queries) = &self.queries {
            if queries.is_empty() {
                return Err(ValidationError::InvalidQuery(
                    "queries cannot be an empty list (omit it to run every analysis)".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Check query vertex indices against a loaded topology
    pub fn validate_against(&self, topology: &Topology) -> Result<(), ValidationError> {
        for query in self.queries() {
            if let Query::ShortestPath { from, to } = query {
                for vertex in [from, to] {
                    if vertex >= topology.vertex_count() {
                        return Err(ValidationError::InvalidQuery(format!(
                            "shortest_path vertex {} is out of range (topology has {} vertices)",
                            vertex,
                            topology.vertex_count()
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Listed queries, or the default set
    pub fn queries(&self) -> Vec<Query> {
        self.queries.clone().unwrap_or_else(Query::defaults)
    }

    pub fn general(&self) -> &GeneralConfig {
        &self.general
    }
}
