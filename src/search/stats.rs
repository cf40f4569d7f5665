//! Search statistics for diagnostics and benchmarking.

use serde::{Deserialize, Serialize};

/// Counters collected during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, including the root and leaves.
    pub nodes: u64,

    /// Times a node stopped exploring siblings because `beta <= alpha`.
    pub cutoffs: u64,

    /// Deepest ply reached below the root.
    pub max_ply: u8,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn visit(&mut self, ply: u8) {
        self.nodes += 1;
        self.max_ply = self.max_ply.max(ply);
    }

    /// Cutoffs per visited node.
    #[must_use]
    pub fn cutoff_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.cutoffs as f64 / self.nodes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.cutoffs, 0);
        assert_eq!(stats.cutoff_rate(), 0.0);
    }

    #[test]
    fn test_visit_tracks_depth() {
        let mut stats = SearchStats::new();
        stats.visit(0);
        stats.visit(3);
        stats.visit(1);

        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.max_ply, 3);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 100;
        stats.cutoffs = 50;

        assert_eq!(stats.cutoff_rate(), 0.5);

        stats.reset();

        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.cutoffs, 0);
    }
}
