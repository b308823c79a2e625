//! Benchmark parameter types.

use std::fmt;

/// Parameters for a full OPTICS run benchmark.
#[derive(Clone, Debug)]
pub struct OpticsBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Neighbour count required for a core point.
    pub min_pts: usize,
}

impl fmt::Display for OpticsBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},min_pts={}", self.point_count, self.min_pts)
    }
}

/// Parameters for a frontier benchmark.
#[derive(Clone, Debug)]
pub struct FrontierBenchParams {
    /// Distinct point ids cycled through the frontier.
    pub points: usize,
    /// Operations applied per iteration.
    pub operations: usize,
}

impl fmt::Display for FrontierBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "points={},ops={}", self.points, self.operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_render_as_benchmark_ids() {
        let run = OpticsBenchParams {
            point_count: 500,
            min_pts: 5,
        };
        let frontier = FrontierBenchParams {
            points: 64,
            operations: 1_000,
        };
        assert_eq!(run.to_string(), "n=500,min_pts=5");
        assert_eq!(frontier.to_string(), "points=64,ops=1000");
    }
}
