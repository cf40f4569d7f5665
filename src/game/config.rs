//! Controller configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::policy::PolicyConfig;

/// Configuration for a [`GameController`](super::GameController).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Per-tier selection parameters.
    pub policy: PolicyConfig,

    /// Shortest simulated thinking time before a computer move.
    pub think_min: Duration,

    /// Longest simulated thinking time (exclusive).
    pub think_max: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            policy: PolicyConfig::default(),
            think_min: Duration::from_millis(400),
            think_max: Duration::from_millis(1000),
        }
    }
}

impl GameConfig {
    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with custom selection parameters.
    pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = policy;
        self
    }

    /// Create a new config with custom thinking-time bounds.
    pub fn with_think_time(mut self, min: Duration, max: Duration) -> Self {
        self.think_min = min;
        self.think_max = max;
        self
    }
}
