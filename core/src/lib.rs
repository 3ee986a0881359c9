//! social-graph-core: In-memory social network analysis.
//!
//! An undirected graph over users `0..N`, backed by per-user neighbor lists,
//! with degree-of-separation (BFS), connected components (iterative DFS),
//! degree ranking and mutual-friend suggestions.
//! No I/O and no randomness; edge generation and rendering live in the
//! driver binary.

mod degree;
mod error;
mod graph;
mod suggest;
mod traversal;

pub use degree::{
    degree_ranking, influential_users, network_stats, top_users_by_connections, DegreeResult,
    NetworkStats, INFLUENTIAL_COUNT, STATS_TOP_N,
};
pub use error::{GraphError, Result};
pub use graph::{NodeId, SocialGraph};
pub use suggest::{friend_suggestions, suggestions_with_counts, Suggestion, SUGGESTION_LIMIT};
pub use traversal::{
    connected_components, degree_of_separation, neighborhood, shortest_path, NeighborResult,
};
