//! Plain-text topology loader.
//!
//! The format is line based:
//!
//! ```text
//! 4
//! 0 1 copper 1000 23
//! 1 2 fiber 500 20
//! ```
//!
//! The first line holds the vertex count. Every following line describes one
//! link as `from to medium bandwidth length`. Blank lines and lines starting
//! with `#` are ignored.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use super::graph::{Topology, TopologyError};
use super::link::{Medium, WeightedLink};

/// Errors that can occur while parsing a topology description
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Topology description is empty (expected a vertex count)")]
    MissingVertexCount,
    #[error("Line {line}: invalid vertex count '{value}'")]
    InvalidVertexCount { line: usize, value: String },
    #[error("Line {line}: expected 5 fields 'from to medium bandwidth length', found {found}")]
    WrongFieldCount { line: usize, found: usize },
    #[error("Line {line}: invalid {field} '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("Line {line}: {field} must be positive, got {value}")]
    NotPositive {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("Line {line}: vertex {vertex} is out of range (topology has {vertex_count} vertices)")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        vertex_count: usize,
    },
    #[error("Line {line}: {source}")]
    Topology {
        line: usize,
        #[source]
        source: TopologyError,
    },
}

fn field<T: std::str::FromStr>(line: usize, name: &'static str, value: &str) -> Result<T, ParseError> {
    value.parse::<T>().map_err(|_| ParseError::InvalidField {
        line,
        field: name,
        value: value.to_string(),
    })
}

fn parse_link(line: usize, fields: &[&str], vertex_count: usize) -> Result<WeightedLink, ParseError> {
    if fields.len() != 5 {
        return Err(ParseError::WrongFieldCount {
            line,
            found: fields.len(),
        });
    }

    let from: usize = field(line, "source vertex", fields[0])?;
    let to: usize = field(line, "target vertex", fields[1])?;
    let medium: Medium = field(line, "medium", fields[2])?;
    let bandwidth: u32 = field(line, "bandwidth", fields[3])?;
    let length: f64 = field(line, "length", fields[4])?;

    for vertex in [from, to] {
        if vertex >= vertex_count {
            return Err(ParseError::VertexOutOfRange {
                line,
                vertex,
                vertex_count,
            });
        }
    }
    if bandwidth == 0 {
        return Err(ParseError::NotPositive {
            line,
            field: "bandwidth",
            value: fields[3].to_string(),
        });
    }
    if !(length.is_finite() && length > 0.0) {
        return Err(ParseError::NotPositive {
            line,
            field: "length",
            value: fields[4].to_string(),
        });
    }

    Ok(WeightedLink::new(from, to, medium, bandwidth, length))
}

/// Parse a topology description held in memory
pub fn parse_topology(content: &str) -> Result<Topology, ParseError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'));

    let (count_line, count_text) = lines.next().ok_or(ParseError::MissingVertexCount)?;
    let vertex_count = match count_text.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            return Err(ParseError::InvalidVertexCount {
                line: count_line,
                value: count_text.to_string(),
            })
        }
    };

    let mut topology = Topology::new(vertex_count);
    for (line, text) in lines {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let link = parse_link(line, &fields, vertex_count)?;
        topology
            .add_link(link)
            .map_err(|source| ParseError::Topology { line, source })?;
    }

    Ok(topology)
}

/// Read and parse a topology file
pub fn parse_topology_file(path: &Path) -> Result<Topology> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read topology file '{}'", path.display()))?;

    let topology = parse_topology(&content)
        .wrap_err_with(|| format!("Failed to parse topology file '{}'", path.display()))?;

    log::info!(
        "Loaded topology from {}: {} vertices, {} links",
        path.display(),
        topology.vertex_count(),
        topology.link_count()
    );
    Ok(topology)
}

/// Serialize a topology back into the line format accepted by [`parse_topology`]
pub fn format_topology(topology: &Topology) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", topology.vertex_count());
    for link in topology.links() {
        let _ = writeln!(
            out,
            "{} {} {} {} {}",
            link.from(),
            link.to(),
            link.medium(),
            link.bandwidth(),
            link.length()
        );
    }
    out
}
