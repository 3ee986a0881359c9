use std::collections::HashMap;

use tracing::trace;

use crate::error::Result;
use crate::graph::{NodeId, SocialGraph};

/// Maximum number of ids returned by [`friend_suggestions`].
pub const SUGGESTION_LIMIT: usize = 5;

/// A suggested friend and how many length-2 paths lead to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub node_id: NodeId,
    pub mutual_count: u32,
}

/// Up to five friend suggestions for `user`, ordered by mutual-friend count
/// (highest first), then by ascending id.
pub fn friend_suggestions(graph: &SocialGraph, user: NodeId) -> Result<Vec<NodeId>> {
    Ok(suggestions_with_counts(graph, user, SUGGESTION_LIMIT)?
        .into_iter()
        .map(|s| s.node_id)
        .collect())
}

/// Friends-of-friends of `user` that are not already direct friends.
///
/// A candidate's count is the number of length-2 paths from `user`, so a
/// candidate reached through two common friends (or through a doubled edge)
/// counts twice. `user` and its direct neighbors are never returned.
pub fn suggestions_with_counts(
    graph: &SocialGraph,
    user: NodeId,
    limit: usize,
) -> Result<Vec<Suggestion>> {
    graph.check_node(user)?;

    let direct = graph.neighbor_set(user);
    let mut mutual: HashMap<NodeId, u32> = HashMap::new();

    for &friend in graph.adjacent(user) {
        for &candidate in graph.adjacent(friend) {
            if candidate != user && !direct.contains(&candidate) {
                *mutual.entry(candidate).or_insert(0) += 1;
            }
        }
    }

    let mut suggestions: Vec<Suggestion> = mutual
        .into_iter()
        .map(|(node_id, mutual_count)| Suggestion {
            node_id,
            mutual_count,
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.mutual_count
            .cmp(&a.mutual_count)
            .then(a.node_id.cmp(&b.node_id))
    });
    suggestions.truncate(limit);

    trace!(user, found = suggestions.len(), "friend suggestions ranked");
    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::traversal::tests::{make_chain, make_diamond, make_star};

    #[test]
    fn test_diamond_counts_both_routes() {
        let g = make_diamond();
        let s = suggestions_with_counts(&g, 0, SUGGESTION_LIMIT).unwrap();
        assert_eq!(
            s,
            vec![Suggestion {
                node_id: 3,
                mutual_count: 2
            }]
        );
        assert_eq!(friend_suggestions(&g, 0).unwrap(), vec![3]);
    }

    #[test]
    fn test_no_neighbors() {
        let g = SocialGraph::new(3).unwrap();
        assert!(friend_suggestions(&g, 1).unwrap().is_empty());
    }

    #[test]
    fn test_neighbors_without_other_friends() {
        let g = make_star(4);
        assert!(friend_suggestions(&g, 0).unwrap().is_empty());
    }

    #[test]
    fn test_leaf_of_star_gets_siblings() {
        let g = make_star(4);
        assert_eq!(friend_suggestions(&g, 1).unwrap(), vec![2, 3, 4]);
    }

    #[test]
    fn test_excludes_direct_friends() {
        // Triangle 0-1-2 plus 2-3: 1 is a friend of 2 but already friends with 0
        let g = SocialGraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        assert_eq!(friend_suggestions(&g, 0).unwrap(), vec![3]);
    }

    #[test]
    fn test_limited_to_five_and_ordered() {
        // User 0 has friends 1 and 2. Candidates 3..=9 hang off 1;
        // 8 and 9 also hang off 2, giving them two mutual friends.
        let mut g = SocialGraph::from_edges(10, [(0, 1), (0, 2)]).unwrap();
        for c in 3..10 {
            g.add_connection(1, c).unwrap();
        }
        g.add_connection(2, 9).unwrap();
        g.add_connection(2, 8).unwrap();

        assert_eq!(friend_suggestions(&g, 0).unwrap(), vec![8, 9, 3, 4, 5]);
        assert_eq!(suggestions_with_counts(&g, 0, 100).unwrap().len(), 7);
    }

    #[test]
    fn test_parallel_edge_counts_twice() {
        let g = SocialGraph::from_edges(3, [(0, 1), (0, 1), (1, 2)]).unwrap();
        let s = suggestions_with_counts(&g, 0, SUGGESTION_LIMIT).unwrap();
        assert_eq!(s[0].mutual_count, 2);
    }

    #[test]
    fn test_self_loop_never_suggests_self() {
        let g = SocialGraph::from_edges(3, [(0, 0), (0, 1), (1, 2)]).unwrap();
        assert_eq!(friend_suggestions(&g, 0).unwrap(), vec![2]);
    }

    #[test]
    fn test_chain_suggests_two_hops() {
        let g = make_chain(5);
        assert_eq!(friend_suggestions(&g, 2).unwrap(), vec![0, 4]);
    }

    #[test]
    fn test_out_of_range() {
        let g = make_chain(3);
        assert_eq!(
            friend_suggestions(&g, 3).unwrap_err(),
            GraphError::out_of_range(3, 3)
        );
    }
}
