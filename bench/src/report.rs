//! Demonstration report: runs every query once and renders the results.

use std::fmt::Write as _;

use anyhow::Result;
use rand::Rng;
use serde::Serialize;
use social_graph_core::{
    connected_components, degree_of_separation, friend_suggestions, influential_users,
    network_stats, NodeId, SocialGraph,
};
use tracing::debug;

use crate::config::DemoConfig;
use crate::generate::random_pair;

#[derive(Debug, Serialize)]
pub struct UserDegree {
    pub user: NodeId,
    pub connections: usize,
}

#[derive(Debug, Serialize)]
pub struct Separation {
    pub from: NodeId,
    pub to: NodeId,
    /// `None` when no path exists.
    pub hops: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub seed: u64,
    pub adjacency: Vec<Vec<NodeId>>,
    pub user_count: usize,
    pub connection_count: usize,
    pub average_connections: f64,
    pub top_users: Vec<UserDegree>,
    pub suggestion_user: NodeId,
    pub suggestions: Vec<NodeId>,
    pub separations: Vec<Separation>,
    pub component_count: usize,
    pub components: Vec<Vec<NodeId>>,
    pub influential: Vec<NodeId>,
}

impl DemoReport {
    /// Run the fixed query sequence against `graph`.
    ///
    /// `rng` is only used to pick the separation pairs.
    pub fn build<R: Rng>(
        graph: &SocialGraph,
        config: &DemoConfig,
        seed: u64,
        rng: &mut R,
    ) -> Result<Self> {
        let adjacency = graph
            .nodes()
            .map(|n| graph.neighbors(n).map(<[NodeId]>::to_vec))
            .collect::<social_graph_core::Result<Vec<_>>>()?;

        let stats = network_stats(graph, config.stats_top_n);
        let suggestions = friend_suggestions(graph, config.suggestion_user)?;

        let mut separations = Vec::with_capacity(config.separation_pairs);
        for _ in 0..config.separation_pairs {
            let (from, to) = random_pair(graph.node_count(), rng);
            let hops = degree_of_separation(graph, from, to)?;
            separations.push(Separation { from, to, hops });
        }

        let mut components = connected_components(graph);
        let component_count = components.len();
        components.truncate(config.components_shown);
        debug!(component_count, "demo queries complete");

        Ok(Self {
            seed,
            adjacency,
            user_count: stats.user_count,
            connection_count: stats.connection_count,
            average_connections: stats.average_connections,
            top_users: stats
                .top_users
                .iter()
                .map(|r| UserDegree {
                    user: r.node_id,
                    connections: r.degree,
                })
                .collect(),
            suggestion_user: config.suggestion_user,
            suggestions,
            separations,
            component_count,
            components,
            influential: influential_users(graph),
        })
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "User Connections:")?;
        for (user, neighbors) in self.adjacency.iter().enumerate() {
            writeln!(out, "User {}: {}", user, join(neighbors))?;
        }

        writeln!(out)?;
        writeln!(out, "Network Statistics:")?;
        writeln!(out, "Number of Users: {}", self.user_count)?;
        writeln!(out, "Number of Connections: {}", self.connection_count)?;
        writeln!(
            out,
            "Average Connections per User: {:.2}",
            self.average_connections
        )?;
        writeln!(out, "Top {} Users with Max Connections:", self.top_users.len())?;
        for u in &self.top_users {
            writeln!(out, "User {}: {} connections", u.user, u.connections)?;
        }

        writeln!(out)?;
        writeln!(out, "Friend Suggestions for User {}:", self.suggestion_user)?;
        if self.suggestions.is_empty() {
            writeln!(out, "(none)")?;
        }
        for s in &self.suggestions {
            writeln!(out, "User {}", s)?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Degree of Separation for {} Random Pairs:",
            self.separations.len()
        )?;
        for s in &self.separations {
            match s.hops {
                Some(h) => writeln!(out, "Between User {} and User {}: {} hops", s.from, s.to, h)?,
                None => writeln!(
                    out,
                    "Between User {} and User {}: No path exists",
                    s.from, s.to
                )?,
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "Connected Components (showing {} of {}):",
            self.components.len(),
            self.component_count
        )?;
        for (i, c) in self.components.iter().enumerate() {
            writeln!(out, "Component {}: {}", i + 1, join(c))?;
        }

        writeln!(out)?;
        writeln!(out, "Top {} Influential Users:", self.influential.len())?;
        for u in &self.influential {
            writeln!(out, "User {}", u)?;
        }
        Ok(())
    }
}

fn join(ids: &[NodeId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn diamond() -> SocialGraph {
        SocialGraph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap()
    }

    fn small_config() -> DemoConfig {
        DemoConfig {
            users: 4,
            separation_pairs: 3,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn test_build_diamond() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let report = DemoReport::build(&diamond(), &small_config(), 5, &mut rng).unwrap();

        assert_eq!(report.adjacency[0], vec![1, 2]);
        assert_eq!(report.suggestions, vec![3]);
        assert_eq!(report.separations.len(), 3);
        assert!(report
            .separations
            .iter()
            .all(|s| s.from != s.to && matches!(s.hops, Some(1..=2))));
        assert_eq!(report.component_count, 1);
        assert_eq!(report.influential.len(), 4);
        assert!((report.average_connections - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_text() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let g = SocialGraph::from_edges(4, [(0, 1)]).unwrap();
        let report = DemoReport::build(&g, &small_config(), 5, &mut rng).unwrap();
        let text = report.render_text();

        assert!(text.contains("User 0: 1\n"));
        assert!(text.contains("Number of Users: 4"));
        assert!(text.contains("Friend Suggestions for User 0:\n(none)"));
        assert!(text.contains("Connected Components (showing 3 of 3):"));
        assert!(text.contains("Component 1: 0 1"));
    }

    #[test]
    fn test_components_truncated() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let g = SocialGraph::new(8).unwrap();
        let config = DemoConfig {
            users: 8,
            ..DemoConfig::default()
        };
        let report = DemoReport::build(&g, &config, 5, &mut rng).unwrap();
        assert_eq!(report.component_count, 8);
        assert_eq!(report.components.len(), 5);
        assert!(report.separations.iter().all(|s| s.hops.is_none()));
    }

    #[test]
    fn test_json_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let report = DemoReport::build(&diamond(), &small_config(), 5, &mut rng).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["seed"], 5);
        assert_eq!(json["suggestions"], serde_json::json!([3]));
        assert_eq!(json["top_users"][0]["connections"], 2);
    }
}
