//! Link model.
//!
//! A [`WeightedLink`] describes one physical connection between two sites.
//! Its latency weight is derived from the physical length and the
//! propagation speed of the link medium, and is never set directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Index of a link inside a topology's link arena
pub type LinkId = usize;

/// Propagation speed of a copper link, in units of 10^7 m/s
pub const COPPER_SPEED: f64 = 23.0;

/// Propagation speed of a fiber link, in units of 10^7 m/s
pub const FIBER_SPEED: f64 = 20.0;

/// Physical medium of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    Copper,
    Fiber,
}

impl Medium {
    /// Propagation speed constant used to derive link latency
    pub fn speed(self) -> f64 {
        match self {
            Medium::Copper => COPPER_SPEED,
            Medium::Fiber => FIBER_SPEED,
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Medium::Copper => write!(f, "copper"),
            Medium::Fiber => write!(f, "fiber"),
        }
    }
}

/// Error returned when a medium token is neither `copper` nor `fiber`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown link medium '{0}' (expected 'copper' or 'fiber')")]
pub struct UnknownMedium(pub String);

impl FromStr for Medium {
    type Err = UnknownMedium;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "copper" => Ok(Medium::Copper),
            "fiber" => Ok(Medium::Fiber),
            other => Err(UnknownMedium(other.to_string())),
        }
    }
}

/// An undirected, weighted link between two vertices.
///
/// Fields are private so the weight always stays a function of
/// `length` and `medium`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedLink {
    from: usize,
    to: usize,
    medium: Medium,
    bandwidth: u32,
    length: f64,
    weight: f64,
}

impl WeightedLink {
    /// Create a link; bandwidth in Mbit/s, length in metres
    pub fn new(from: usize, to: usize, medium: Medium, bandwidth: u32, length: f64) -> Self {
        Self {
            from,
            to,
            medium,
            bandwidth,
            length,
            weight: length / medium.speed(),
        }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn medium(&self) -> Medium {
        self.medium
    }

    pub fn bandwidth(&self) -> u32 {
        self.bandwidth
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Propagation latency in units of 10^-7 seconds
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the endpoint opposite `vertex`.
    ///
    /// For a self-loop both endpoints are the same vertex.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.from {
            self.to
        } else {
            self.from
        }
    }

    /// Returns true if `vertex` is one of the endpoints
    pub fn touches(&self, vertex: usize) -> bool {
        self.from == vertex || self.to == vertex
    }

    /// Copy of this link with `from` set to `vertex`, used to report paths
    /// in walking order
    pub fn oriented_from(&self, vertex: usize) -> Self {
        if vertex == self.from {
            self.clone()
        } else {
            Self {
                from: self.to,
                to: self.from,
                ..self.clone()
            }
        }
    }
}

impl fmt::Display for WeightedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.from, self.to)
    }
}
