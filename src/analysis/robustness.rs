//! Two-vertex failure analysis.
//!
//! The network survives any two simultaneous site failures iff, for every
//! vertex i, the topology with i removed is connected and has no
//! articulation point. Each of the V trials is one low-link DFS over the
//! remainder, so the whole check costs O(V * (V + E)).

use log::debug;

use super::types::{FailurePair, RobustnessReport};
use crate::topology::Topology;

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    // next position in the vertex's adjacency list
    next: usize,
    children: usize,
}

/// Runs every single-vertex exclusion trial for a topology
#[derive(Debug, Clone)]
pub struct RobustnessAnalyzer {
    discovery: Vec<Option<usize>>,
    low: Vec<usize>,
    counter: usize,
    trials: usize,
    failing_pair: Option<FailurePair>,
}

impl RobustnessAnalyzer {
    pub fn new(topology: &Topology) -> Self {
        let n = topology.vertex_count();
        let mut analyzer = Self {
            discovery: vec![None; n],
            low: vec![0; n],
            counter: 0,
            trials: 0,
            failing_pair: None,
        };

        // With two or fewer sites, nothing is left to disconnect
        if n <= 2 {
            return analyzer;
        }

        for excluded in 0..n {
            analyzer.trials += 1;
            if let Some(critical) = analyzer.trial(topology, excluded) {
                debug!(
                    "Removing vertices {} and {} disconnects the network",
                    excluded, critical
                );
                analyzer.failing_pair = Some(FailurePair { excluded, critical });
                break;
            }
        }
        analyzer
    }

    /// Runs the trial for `excluded`, returning a vertex whose failure
    /// together with `excluded` splits the network.
    fn trial(&mut self, topology: &Topology, excluded: usize) -> Option<usize> {
        self.discovery.fill(None);
        self.counter = 0;

        let root = if excluded == 0 { 1 } else { 0 };
        if let Some(articulation) = self.find_articulation(topology, root, excluded) {
            return Some(articulation);
        }

        let remainder = topology.vertex_count() - 1;
        if self.counter == remainder || remainder < 3 {
            return None;
        }

        // The remainder is already split. Removing the root keeps it split
        // when the root's component has other vertices; otherwise the root
        // stays isolated from the rest once any unreached vertex is removed.
        if self.counter >= 2 {
            Some(root)
        } else {
            (0..topology.vertex_count()).find(|&v| v != excluded && self.discovery[v].is_none())
        }
    }

    fn visit(&mut self, v: usize) {
        self.discovery[v] = Some(self.counter);
        self.low[v] = self.counter;
        self.counter += 1;
    }

    /// Iterative low-link DFS from `root` that never enters `excluded`.
    ///
    /// Returns the first articulation point found in the DFS tree.
    fn find_articulation(&mut self, topology: &Topology, root: usize, excluded: usize) -> Option<usize> {
        self.visit(root);
        let mut stack = vec![Frame {
            vertex: root,
            parent: None,
            next: 0,
            children: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let v = frame.vertex;

            if let Some(&id) = topology.adjacent(v).get(frame.next) {
                frame.next += 1;
                let w = topology.link(id).other(v);
                if w == excluded {
                    continue;
                }

                match self.discovery[w] {
                    None => {
                        frame.children += 1;
                        self.visit(w);
                        stack.push(Frame {
                            vertex: w,
                            parent: Some(v),
                            next: 0,
                            children: 0,
                        });
                    }
                    // back edge; the link to the DFS parent does not count
                    Some(d) if frame.parent != Some(w) => {
                        self.low[v] = self.low[v].min(d);
                    }
                    Some(_) => {}
                }
                continue;
            }

            let done = *frame;
            stack.pop();
            match stack.last() {
                Some(parent) => {
                    let u = parent.vertex;
                    self.low[u] = self.low[u].min(self.low[done.vertex]);
                    let u_discovery = self.discovery[u].unwrap_or(0);
                    if parent.parent.is_some() && self.low[done.vertex] >= u_discovery {
                        return Some(u);
                    }
                }
                None => {
                    if done.children > 1 {
                        return Some(done.vertex);
                    }
                }
            }
        }
        None
    }

    pub fn is_robust(&self) -> bool {
        self.failing_pair.is_none()
    }

    pub fn failing_pair(&self) -> Option<FailurePair> {
        self.failing_pair
    }

    pub fn report(&self) -> RobustnessReport {
        RobustnessReport {
            robust: self.is_robust(),
            failing_pair: self.failing_pair,
            trials: self.trials,
        }
    }
}
