#[cfg(test)]
mod topology_analysis_tests {
    use std::collections::VecDeque;
    use std::io::Write;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use tempfile::NamedTempFile;

    use netanalysis::analysis::{Analyzer, MinimumSpanningForest, RobustnessAnalyzer};
    use netanalysis::config::Query;
    use netanalysis::orchestrator::run_queries;
    use netanalysis::topology::{
        generate_topology, parse_topology_file, GeneratorOptions, Medium, Topology, WeightedLink,
    };

    const EPSILON: f64 = 1e-9;

    fn fixture() -> Topology {
        let mut topology = Topology::new(4);
        topology.connect(0, 1, Medium::Copper, 1000, 23.0).unwrap();
        topology.connect(1, 2, Medium::Fiber, 500, 20.0).unwrap();
        topology.connect(2, 3, Medium::Copper, 800, 46.0).unwrap();
        topology.connect(0, 3, Medium::Fiber, 300, 40.0).unwrap();
        topology
    }

    fn random_topologies(count: u64, max_vertices: usize) -> Vec<Topology> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        (0..count)
            .map(|seed| {
                let vertices = rng.gen_range(1..=max_vertices);
                let options = GeneratorOptions {
                    vertices,
                    links: rng.gen_range(0..=vertices * 2),
                    connected: rng.gen_bool(0.7),
                    max_length: 60.0,
                    seed: Some(seed),
                    ..Default::default()
                };
                generate_topology(&options).unwrap()
            })
            .collect()
    }

    /// All-pairs latency by Floyd-Warshall
    fn reference_distances(topology: &Topology) -> Vec<Vec<f64>> {
        let n = topology.vertex_count();
        let mut dist = vec![vec![f64::INFINITY; n]; n];
        for (v, row) in dist.iter_mut().enumerate() {
            row[v] = 0.0;
        }
        for link in topology.links() {
            let (a, b) = (link.from(), link.to());
            if link.weight() < dist[a][b] {
                dist[a][b] = link.weight();
                dist[b][a] = link.weight();
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if dist[i][k] + dist[k][j] < dist[i][j] {
                        dist[i][j] = dist[i][k] + dist[k][j];
                    }
                }
            }
        }
        dist
    }

    /// Minimum spanning forest weight by Kruskal
    fn reference_forest_weight(topology: &Topology) -> f64 {
        fn find(parent: &mut [usize], v: usize) -> usize {
            let mut root = v;
            while parent[root] != root {
                root = parent[root];
            }
            parent[v] = root;
            root
        }

        let mut links: Vec<&WeightedLink> = topology.links().iter().collect();
        links.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
        let mut parent: Vec<usize> = (0..topology.vertex_count()).collect();
        let mut total = 0.0;
        for link in links {
            let (a, b) = (find(&mut parent, link.from()), find(&mut parent, link.to()));
            if a != b {
                parent[a] = b;
                total += link.weight();
            }
        }
        total
    }

    /// True if the vertices not in `removed` form one connected piece
    fn connected_without(topology: &Topology, removed: &[usize]) -> bool {
        let n = topology.vertex_count();
        let Some(start) = (0..n).find(|v| !removed.contains(v)) else {
            return true;
        };
        let mut seen = vec![false; n];
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        let mut reached = 1;
        while let Some(v) = queue.pop_front() {
            for (_, link) in topology.incident_links(v) {
                let w = link.other(v);
                if !seen[w] && !removed.contains(&w) {
                    seen[w] = true;
                    reached += 1;
                    queue.push_back(w);
                }
            }
        }
        reached == n - removed.len()
    }

    fn brute_force_robust(topology: &Topology) -> bool {
        let n = topology.vertex_count();
        if n <= 2 {
            return true;
        }
        (0..n).all(|a| (a + 1..n).all(|b| connected_without(topology, &[a, b])))
    }

    #[test]
    fn test_fixture_scenario() {
        let topology = fixture();

        let path = topology.shortest_path(0, 2).unwrap();
        assert!(path.exists);
        assert!((path.distance - 2.0).abs() < EPSILON);
        assert_eq!(path.bottleneck_bandwidth, Some(500));
        let walk: Vec<(usize, usize)> = path.links.iter().map(|l| (l.from(), l.to())).collect();
        assert_eq!(walk, vec![(0, 1), (1, 2)]);

        assert!(!topology.is_medium_connected(Medium::Copper));
        assert!(!topology.is_medium_connected(Medium::Fiber));
        assert!(!topology.is_robust_to_double_failure());
    }

    #[test]
    fn test_fixture_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "4\n0 1 copper 1000 23\n1 2 fiber 500 20\n2 3 copper 800 46\n0 3 fiber 300 40\n"
        )
        .unwrap();

        let topology = parse_topology_file(file.path()).unwrap();
        assert_eq!(topology, fixture());
    }

    #[test]
    fn test_shortest_paths_match_reference() {
        for topology in random_topologies(40, 8) {
            let reference = reference_distances(&topology);
            let n = topology.vertex_count();

            for s in 0..n {
                let tree = topology.shortest_path_tree(s).unwrap();
                for t in 0..n {
                    let expected = reference[s][t];
                    let path = tree.path(t).unwrap();

                    if expected.is_infinite() {
                        assert!(!path.exists, "{} -> {} should be unreachable", s, t);
                        assert!(path.links.is_empty());
                        continue;
                    }
                    assert!(path.exists);
                    assert!(
                        (path.distance - expected).abs() < EPSILON,
                        "{} -> {}: got {}, expected {}",
                        s,
                        t,
                        path.distance,
                        expected
                    );

                    // the walk is contiguous, sums to the distance and its
                    // bottleneck is the narrowest link on it
                    let mut at = s;
                    let mut total = 0.0;
                    for link in &path.links {
                        assert_eq!(link.from(), at);
                        at = link.to();
                        total += link.weight();
                    }
                    assert_eq!(at, t);
                    assert!((total - path.distance).abs() < EPSILON);
                    let narrowest = path.links.iter().map(WeightedLink::bandwidth).min();
                    assert_eq!(path.bottleneck_bandwidth, narrowest);
                }
            }
        }
    }

    #[test]
    fn test_complete_graph_forest_weight() {
        // K4 with distinct weights 1..6; the unique minimum is 1 + 2 + 3
        let mut topology = Topology::new(4);
        let pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        for (i, &(a, b)) in pairs.iter().enumerate() {
            topology
                .connect(a, b, Medium::Copper, 100, 23.0 * (i + 1) as f64)
                .unwrap();
        }

        let forest = topology.minimum_spanning_forest().unwrap();
        assert!((forest.total_weight - 6.0).abs() < EPSILON);
        assert_eq!(forest.edges.len(), 3);
        assert_eq!(forest.tree_count, 1);
    }

    #[test]
    fn test_forest_weight_matches_reference() {
        for topology in random_topologies(40, 9) {
            let forest = MinimumSpanningForest::new(&topology).unwrap();
            let expected = reference_forest_weight(&topology);
            assert!(
                (forest.weight() - expected).abs() < EPSILON,
                "forest weight {} differs from {}",
                forest.weight(),
                expected
            );

            let summary = forest.summary();
            assert_eq!(summary.edges.len() + summary.tree_count, topology.vertex_count());
        }
    }

    #[test]
    fn test_robustness_matches_brute_force() {
        for topology in random_topologies(150, 8) {
            let analyzer = RobustnessAnalyzer::new(&topology);
            let expected = brute_force_robust(&topology);
            assert_eq!(
                analyzer.is_robust(),
                expected,
                "robustness mismatch for {:?}",
                topology.links()
            );

            if let Some(pair) = analyzer.failing_pair() {
                assert_ne!(pair.excluded, pair.critical);
                assert!(!connected_without(&topology, &[pair.excluded, pair.critical]));
            }
        }
    }

    #[test]
    fn test_dense_graphs_are_robust() {
        let mut rng = StdRng::seed_from_u64(99);
        for n in 3..=7 {
            let mut topology = Topology::new(n);
            for a in 0..n {
                for b in a + 1..n {
                    let medium = if rng.gen_bool(0.5) { Medium::Copper } else { Medium::Fiber };
                    topology
                        .connect(a, b, medium, rng.gen_range(1..1000), rng.gen_range(1.0..100.0))
                        .unwrap();
                }
            }
            assert!(topology.is_robust_to_double_failure(), "K{} must be robust", n);
            assert!(brute_force_robust(&topology));
        }
    }

    #[test]
    fn test_medium_connectivity_matches_reference() {
        for topology in random_topologies(40, 8) {
            for medium in [Medium::Copper, Medium::Fiber] {
                let mut restricted = Topology::new(topology.vertex_count());
                for link in topology.links().iter().filter(|l| l.medium() == medium) {
                    restricted.add_link(link.clone()).unwrap();
                }
                assert_eq!(
                    topology.is_medium_connected(medium),
                    connected_without(&restricted, &[])
                );
            }
        }
    }

    #[test]
    fn test_analyzer_and_batch_agree() {
        let topology = fixture();
        let queries = vec![
            Query::ShortestPath { from: 3, to: 1 },
            Query::MediumConnected { medium: Medium::Fiber },
            Query::SpanningForest,
            Query::Robustness,
        ];
        let report = run_queries(&topology, &queries, "fixture").unwrap();

        let mut analyzer = Analyzer::new(&topology);
        let path = analyzer.shortest_path(3, 1).unwrap();
        assert_eq!(report.shortest_paths[0].links, path.links);
        assert_eq!(
            report.medium_connectivity[0].connected,
            analyzer.is_medium_connected(Medium::Fiber)
        );
        assert_eq!(report.robustness, Some(analyzer.robustness()));
    }
}
