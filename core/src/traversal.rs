use std::collections::VecDeque;

use tracing::debug;

use crate::error::Result;
use crate::graph::{NodeId, SocialGraph};

/// A node found during BFS neighborhood traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborResult {
    pub node_id: NodeId,
    pub distance: u32,
}

/// Degree of separation between two users: the minimum number of hops.
///
/// Returns `None` when `target` is unreachable from `start`, and `Some(0)`
/// when they are the same user. Each node's distance is written once, on
/// first discovery; BFS order guarantees that first distance is minimal.
pub fn degree_of_separation(
    graph: &SocialGraph,
    start: NodeId,
    target: NodeId,
) -> Result<Option<u32>> {
    graph.check_node(start)?;
    graph.check_node(target)?;

    if start == target {
        return Ok(Some(0));
    }

    let mut dist: Vec<Option<u32>> = vec![None; graph.node_count()];
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    dist[start] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let depth = dist[current].unwrap_or_default();
        for &next in graph.adjacent(current) {
            if dist[next].is_none() {
                dist[next] = Some(depth + 1);
                if next == target {
                    return Ok(dist[next]);
                }
                queue.push_back(next);
            }
        }
    }

    Ok(None)
}

/// One shortest path from `start` to `target`, both endpoints included.
///
/// The path has `degree_of_separation(start, target) + 1` nodes. Ties are
/// resolved by adjacency order, so the first-discovered parent wins.
pub fn shortest_path(
    graph: &SocialGraph,
    start: NodeId,
    target: NodeId,
) -> Result<Option<Vec<NodeId>>> {
    graph.check_node(start)?;
    graph.check_node(target)?;

    if start == target {
        return Ok(Some(vec![start]));
    }

    // parent[n] = node that discovered n. Start is its own parent.
    let mut parent: Vec<Option<NodeId>> = vec![None; graph.node_count()];
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    parent[start] = Some(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in graph.adjacent(current) {
            if parent[next].is_none() {
                parent[next] = Some(current);
                if next == target {
                    return Ok(Some(reconstruct_path(&parent, start, target)));
                }
                queue.push_back(next);
            }
        }
    }

    Ok(None)
}

fn reconstruct_path(parent: &[Option<NodeId>], start: NodeId, target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;

    while current != start {
        match parent[current] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

/// All users within `max_depth` hops of `start`, excluding `start` itself.
///
/// Results are in BFS discovery order, so distances are non-decreasing.
pub fn neighborhood(
    graph: &SocialGraph,
    start: NodeId,
    max_depth: u32,
) -> Result<Vec<NeighborResult>> {
    graph.check_node(start)?;

    let mut dist: Vec<Option<u32>> = vec![None; graph.node_count()];
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    let mut found = Vec::new();

    dist[start] = Some(0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for &next in graph.adjacent(current) {
            if dist[next].is_none() {
                dist[next] = Some(depth + 1);
                found.push(NeighborResult {
                    node_id: next,
                    distance: depth + 1,
                });
                queue.push_back((next, depth + 1));
            }
        }
    }

    Ok(found)
}

/// Undirected connected components.
///
/// Components are listed in order of their smallest member. Within a
/// component, nodes appear in depth-first preorder following adjacency order.
/// Uses an explicit stack of `(node, next neighbor index)` frames so long
/// chains cannot exhaust the call stack.
pub fn connected_components(graph: &SocialGraph) -> Vec<Vec<NodeId>> {
    let mut visited = vec![false; graph.node_count()];
    let mut components = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    for root in graph.nodes() {
        if visited[root] {
            continue;
        }

        let mut component = vec![root];
        visited[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            match graph.adjacent(node).get(cursor) {
                Some(&next) => {
                    frame.1 += 1;
                    if !visited[next] {
                        visited[next] = true;
                        component.push(next);
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        components.push(component);
    }

    debug!(components = components.len(), "connected components computed");
    components
}
