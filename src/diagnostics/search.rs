use crate::lines::{Line, Representative};
use serde::Serialize;

/// What one rung of the resolution ladder produced.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptReport {
    /// Zero-based rung index.
    pub attempt: usize,
    pub rho_resolution: f32,
    /// Candidates returned by the line detector.
    pub raw_lines: usize,
    /// Candidates left after normalization (non-finite ones are dropped).
    pub normalized_lines: usize,
    pub cluster_sizes: Vec<usize>,
    pub representatives: Vec<Representative>,
    pub elapsed_ms: f64,
}

impl AttemptReport {
    pub fn cluster_count(&self) -> usize {
        self.cluster_sizes.len()
    }

    pub fn representative_lines(&self) -> Vec<Line> {
        self.representatives.iter().map(|r| r.line).collect()
    }
}
