//! Edge generators. All take a caller-seeded RNG so runs are reproducible.

use anyhow::Result;
use rand::Rng;
use social_graph_core::SocialGraph;

/// Draw `attempts` uniform user pairs and connect each distinct pair.
///
/// Self-pairs are skipped; repeated pairs are inserted again. Returns the
/// number of connections added.
pub fn generate_random_connections<R: Rng>(
    graph: &mut SocialGraph,
    attempts: usize,
    rng: &mut R,
) -> Result<usize> {
    let n = graph.node_count();
    let mut added = 0;

    for _ in 0..attempts {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            graph.add_connection(a, b)?;
            added += 1;
        }
    }

    Ok(added)
}

/// Pick two distinct users. Requires at least two users.
pub fn random_pair<R: Rng>(node_count: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.gen_range(0..node_count);
    let mut b = rng.gen_range(0..node_count);
    while a == b {
        b = rng.gen_range(0..node_count);
    }
    (a, b)
}

// ---------------------------------------------------------------------------
// Benchmark topologies
// ---------------------------------------------------------------------------

/// Uniform random edges, ~10 per user.
pub fn gen_random<R: Rng>(node_count: usize, rng: &mut R) -> Result<SocialGraph> {
    let mut graph = SocialGraph::new(node_count)?;
    generate_random_connections(&mut graph, node_count * 10, rng)?;
    Ok(graph)
}

/// A single path 0-1-2-...; worst case for traversal depth.
pub fn gen_chain<R: Rng>(node_count: usize, _rng: &mut R) -> Result<SocialGraph> {
    let edges = (1..node_count).map(|i| (i - 1, i));
    Ok(SocialGraph::from_edges(node_count, edges)?)
}

/// One hub connected to every other user.
pub fn gen_star<R: Rng>(node_count: usize, _rng: &mut R) -> Result<SocialGraph> {
    let edges = (1..node_count).map(|i| (0, i));
    Ok(SocialGraph::from_edges(node_count, edges)?)
}

/// Small-world (Watts-Strogatz): ring lattice with occasional rewiring.
///
/// Each user links to its `k` clockwise successors; each link is rewired
/// to a random user with probability 0.05.
pub fn gen_small_world<R: Rng>(node_count: usize, rng: &mut R) -> Result<SocialGraph> {
    let k = 5.min(node_count.saturating_sub(1));
    let p = 0.05f64;
    let mut graph = SocialGraph::new(node_count)?;

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            if rng.gen_bool(p) {
                let rewired = rng.gen_range(0..node_count);
                graph.add_connection(i, if rewired != i { rewired } else { neighbor })?;
            } else {
                graph.add_connection(i, neighbor)?;
            }
        }
    }

    Ok(graph)
}

/// Scale-free via preferential attachment on an endpoint list.
///
/// Sampling a random endpoint picks users in proportion to their degree.
pub fn gen_scale_free<R: Rng>(node_count: usize, rng: &mut R) -> Result<SocialGraph> {
    let edges_per_node = 3usize;
    let seed = 4.min(node_count);
    let mut graph = SocialGraph::new(node_count)?;
    let mut endpoints: Vec<usize> = Vec::with_capacity(node_count * edges_per_node * 2);

    // Seed: small clique
    for i in 0..seed {
        for j in (i + 1)..seed {
            graph.add_connection(i, j)?;
            endpoints.extend([i, j]);
        }
    }

    for new_node in seed..node_count {
        if endpoints.is_empty() {
            graph.add_connection(new_node, rng.gen_range(0..new_node))?;
            continue;
        }
        for _ in 0..edges_per_node.min(new_node) {
            let target = endpoints[rng.gen_range(0..endpoints.len())];
            if target != new_node {
                graph.add_connection(new_node, target)?;
                endpoints.extend([new_node, target]);
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use social_graph_core::connected_components;

    #[test]
    fn test_random_connections_deterministic() {
        let build = || {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let mut g = SocialGraph::new(50).unwrap();
            generate_random_connections(&mut g, 100, &mut rng).unwrap();
            g.nodes()
                .map(|n| g.neighbors(n).unwrap().to_vec())
                .collect::<Vec<_>>()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_random_connections_skip_self_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut g = SocialGraph::new(5).unwrap();
        let added = generate_random_connections(&mut g, 200, &mut rng).unwrap();

        assert!(added <= 200);
        assert_eq!(g.connection_count(), added);
        for n in g.nodes() {
            assert!(!g.neighbors(n).unwrap().contains(&n));
        }
    }

    #[test]
    fn test_single_user_gets_no_edges() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut g = SocialGraph::new(1).unwrap();
        assert_eq!(generate_random_connections(&mut g, 10, &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_random_pair_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let (a, b) = random_pair(2, &mut rng);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_topologies_are_connected() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for g in [
            gen_chain(100, &mut rng).unwrap(),
            gen_star(100, &mut rng).unwrap(),
            gen_scale_free(100, &mut rng).unwrap(),
        ] {
            assert_eq!(connected_components(&g).len(), 1);
        }
    }

    #[test]
    fn test_small_world_edge_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let g = gen_small_world(100, &mut rng).unwrap();
        assert_eq!(g.connection_count(), 500);
    }
}
