use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Parameters for the demonstration run.
///
/// Loaded from JSON with `--config`; any field left out of the file keeps its
/// default. Command-line flags are applied on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub users: usize,
    /// Random pair draws; self-pairs are skipped, so fewer edges may result.
    pub connection_attempts: usize,
    pub seed: Option<u64>,
    pub suggestion_user: usize,
    pub separation_pairs: usize,
    pub components_shown: usize,
    pub stats_top_n: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            users: 250,
            connection_attempts: 500,
            seed: None,
            suggestion_user: 0,
            separation_pairs: 5,
            components_shown: 5,
            stats_top_n: social_graph_core::STATS_TOP_N,
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("parsing config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.users == 0 {
            bail!("users must be positive");
        }
        if self.suggestion_user >= self.users {
            bail!(
                "suggestion_user {} out of range for {} users",
                self.suggestion_user,
                self.users
            );
        }
        if self.separation_pairs > 0 && self.users < 2 {
            bail!("separation pairs need at least 2 users");
        }
        Ok(())
    }
}
