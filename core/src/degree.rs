use crate::graph::{NodeId, SocialGraph};

/// Number of users reported by [`influential_users`].
pub const INFLUENTIAL_COUNT: usize = 5;

/// Length of the degree ranking included in [`NetworkStats`] by default.
pub const STATS_TOP_N: usize = 10;

/// Degree information for a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeResult {
    pub node_id: NodeId,
    pub degree: usize,
}

/// Summary statistics over the whole graph.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkStats {
    pub user_count: usize,
    pub connection_count: usize,
    pub total_degree: usize,
    /// Total degree divided by user count.
    pub average_connections: f64,
    pub top_users: Vec<DegreeResult>,
}

/// Users ranked by degree, highest first, with ties broken by ascending id.
///
/// Returns at most `min(top_n, node_count)` entries; `top_n == 0` yields none.
pub fn degree_ranking(graph: &SocialGraph, top_n: usize) -> Vec<DegreeResult> {
    let mut results: Vec<DegreeResult> = graph
        .nodes()
        .map(|id| DegreeResult {
            node_id: id,
            degree: graph.adjacent(id).len(),
        })
        .collect();

    results.sort_by(|a, b| b.degree.cmp(&a.degree).then(a.node_id.cmp(&b.node_id)));
    results.truncate(top_n);
    results
}

/// Ids of the `top_n` most connected users. See [`degree_ranking`] for ordering.
pub fn top_users_by_connections(graph: &SocialGraph, top_n: usize) -> Vec<NodeId> {
    degree_ranking(graph, top_n)
        .into_iter()
        .map(|r| r.node_id)
        .collect()
}

/// The five most connected users.
pub fn influential_users(graph: &SocialGraph) -> Vec<NodeId> {
    top_users_by_connections(graph, INFLUENTIAL_COUNT)
}

pub fn network_stats(graph: &SocialGraph, top_n: usize) -> NetworkStats {
    let total_degree = graph.total_degree();
    NetworkStats {
        user_count: graph.node_count(),
        connection_count: graph.connection_count(),
        total_degree,
        average_connections: total_degree as f64 / graph.node_count() as f64,
        top_users: degree_ranking(graph, top_n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::tests::{make_chain, make_star};

    #[test]
    fn test_ranking_star() {
        let g = make_star(4);
        let ranking = degree_ranking(&g, 2);
        assert_eq!(
            ranking,
            vec![
                DegreeResult { node_id: 0, degree: 4 },
                DegreeResult { node_id: 1, degree: 1 },
            ]
        );
    }

    #[test]
    fn test_ties_broken_by_ascending_id() {
        let g = make_chain(5);
        // Interior nodes 1..=3 have degree 2, endpoints have degree 1
        assert_eq!(top_users_by_connections(&g, 5), vec![1, 2, 3, 0, 4]);
    }

    #[test]
    fn test_top_n_zero() {
        let g = make_star(3);
        assert!(top_users_by_connections(&g, 0).is_empty());
    }

    #[test]
    fn test_top_n_larger_than_graph() {
        let g = make_chain(3);
        assert_eq!(top_users_by_connections(&g, 10).len(), 3);
    }

    #[test]
    fn test_parallel_edges_raise_degree() {
        let g = SocialGraph::from_edges(3, [(2, 1), (2, 1), (0, 1)]).unwrap();
        assert_eq!(top_users_by_connections(&g, 3), vec![1, 2, 0]);
    }

    #[test]
    fn test_influential_users_is_top_five() {
        let g = make_star(9);
        let influential = influential_users(&g);
        assert_eq!(influential, top_users_by_connections(&g, 5));
        assert_eq!(influential, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_network_stats() {
        let g = make_star(4);
        let stats = network_stats(&g, STATS_TOP_N);
        assert_eq!(stats.user_count, 5);
        assert_eq!(stats.connection_count, 4);
        assert_eq!(stats.total_degree, 8);
        assert!((stats.average_connections - 1.6).abs() < 1e-9);
        assert_eq!(stats.top_users.len(), 5);
        assert_eq!(stats.top_users[0], DegreeResult { node_id: 0, degree: 4 });
    }
}
