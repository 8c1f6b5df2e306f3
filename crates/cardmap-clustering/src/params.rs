//! Density parameters derived from the board size and config.

use cardmap_core::config::defaults::{EPS_MAX, EPS_MIN, MIN_PTS_FLOOR, MIN_PTS_POINTS_PER_NEIGHBOR};
use cardmap_core::config::ClusteringConfig;

/// `eps` and `minPts` for a run over `n` points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveParameters {
    /// Neighbourhood radius in distance units.
    pub eps: f64,
    pub min_pts: usize,
}

impl AdaptiveParameters {
    /// `eps = clamp(1 − threshold, 0.2, 0.8)`, `minPts = max(2, min(minClusterSize, ⌊n/8⌋))`.
    pub fn derive(n: usize, config: &ClusteringConfig) -> Self {
        let eps = (1.0 - config.similarity_threshold).clamp(EPS_MIN, EPS_MAX);
        let upper = n / MIN_PTS_POINTS_PER_NEIGHBOR;
        let min_pts = config.min_cluster_size.min(upper).max(MIN_PTS_FLOOR);
        Self { eps, min_pts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eps_is_clamped() {
        let strict = ClusteringConfig::default().with_similarity_threshold(0.95);
        let loose = ClusteringConfig::default().with_similarity_threshold(0.0);
        assert_eq!(AdaptiveParameters::derive(10, &strict).eps, EPS_MIN);
        assert_eq!(AdaptiveParameters::derive(10, &loose).eps, EPS_MAX);
        let mid = ClusteringConfig::default().with_similarity_threshold(0.6);
        assert!((AdaptiveParameters::derive(10, &mid).eps - 0.4).abs() < 1e-12);
    }

    #[test]
    fn min_pts_floor_wins_on_small_boards() {
        let config = ClusteringConfig::default().with_size_bounds(5, 20);
        assert_eq!(AdaptiveParameters::derive(6, &config).min_pts, 2);
        assert_eq!(AdaptiveParameters::derive(32, &config).min_pts, 4);
        assert_eq!(AdaptiveParameters::derive(200, &config).min_pts, 5);
    }
}
