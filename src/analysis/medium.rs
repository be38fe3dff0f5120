//! Single-medium connectivity.
//!
//! Answers whether the sites stay connected when only links of one medium
//! (for example copper) are usable.

use log::debug;

use super::types::MediumConnectivityReport;
use crate::topology::{Medium, Topology};

/// Reachability from vertex 0 over links of a single medium
#[derive(Debug, Clone)]
pub struct MediumConnectivity {
    medium: Medium,
    marked: Vec<bool>,
    count: usize,
}

impl MediumConnectivity {
    pub fn new(topology: &Topology, medium: Medium) -> Self {
        let n = topology.vertex_count();
        let mut checker = Self {
            medium,
            marked: vec![false; n],
            count: 0,
        };
        if n > 0 {
            checker.dfs(topology, 0);
        }

        debug!(
            "{} links reach {} of {} vertices from vertex 0",
            medium, checker.count, n
        );
        checker
    }

    fn dfs(&mut self, topology: &Topology, start: usize) {
        let mut stack = vec![start];
        self.marked[start] = true;
        self.count += 1;

        while let Some(v) = stack.pop() {
            for (_, link) in topology.incident_links(v) {
                if link.medium() != self.medium {
                    continue;
                }
                let w = link.other(v);
                if !self.marked[w] {
                    self.marked[w] = true;
                    self.count += 1;
                    stack.push(w);
                }
            }
        }
    }

    /// True if every vertex was reached
    pub fn is_connected(&self) -> bool {
        self.count == self.marked.len()
    }

    pub fn reached_count(&self) -> usize {
        self.count
    }

    /// Vertices reachable from vertex 0, ascending
    pub fn reached(&self) -> Vec<usize> {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(v, &m)| m.then_some(v))
            .collect()
    }

    pub fn report(&self) -> MediumConnectivityReport {
        MediumConnectivityReport {
            medium: self.medium,
            connected: self.is_connected(),
            reached_vertices: self.count,
            total_vertices: self.marked.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Topology {
        let mut topology = Topology::new(4);
        topology.connect(0, 1, Medium::Copper, 1000, 23.0).unwrap();
        topology.connect(1, 2, Medium::Fiber, 500, 20.0).unwrap();
        topology.connect(2, 3, Medium::Copper, 800, 46.0).unwrap();
        topology.connect(0, 3, Medium::Fiber, 300, 40.0).unwrap();
        topology
    }

    #[test]
    fn test_copper_only_split() {
        let checker = MediumConnectivity::new(&sample(), Medium::Copper);

        assert!(!checker.is_connected());
        assert_eq!(checker.reached(), vec![0, 1]);
    }

    #[test]
    fn test_fiber_only_split() {
        let checker = MediumConnectivity::new(&sample(), Medium::Fiber);

        assert!(!checker.is_connected());
        assert_eq!(checker.reached(), vec![0, 3]);
    }

    #[test]
    fn test_copper_ring_is_connected() {
        let mut topology = Topology::new(4);
        for v in 0..4 {
            topology.connect(v, (v + 1) % 4, Medium::Copper, 100, 23.0).unwrap();
        }
        topology.connect(0, 2, Medium::Fiber, 100, 20.0).unwrap();

        let report = MediumConnectivity::new(&topology, Medium::Copper).report();
        assert!(report.connected);
        assert_eq!(report.reached_vertices, 4);
        assert!(!MediumConnectivity::new(&topology, Medium::Fiber).is_connected());
    }

    #[test]
    fn test_link_direction_does_not_matter() {
        let mut topology = Topology::new(3);
        topology.connect(1, 0, Medium::Copper, 100, 23.0).unwrap();
        topology.connect(2, 1, Medium::Copper, 100, 23.0).unwrap();

        assert!(MediumConnectivity::new(&topology, Medium::Copper).is_connected());
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(MediumConnectivity::new(&Topology::new(0), Medium::Copper).is_connected());
        assert!(MediumConnectivity::new(&Topology::new(1), Medium::Fiber).is_connected());
        assert!(!MediumConnectivity::new(&Topology::new(2), Medium::Fiber).is_connected());
    }
}
