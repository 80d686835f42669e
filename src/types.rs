use crate::lines::{Line, Segment};
use serde::{Deserialize, Serialize};

/// The four boundary lines of the table, one per edge cluster, in cluster
/// creation order. Cannot be constructed from any other number of lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableBoundary {
    lines: [Line; 4],
}

impl TableBoundary {
    pub fn new(lines: [Line; 4]) -> Self {
        Self { lines }
    }

    /// Accepts exactly four lines.
    pub fn from_lines(lines: &[Line]) -> Option<Self> {
        let lines: [Line; 4] = lines.try_into().ok()?;
        Some(Self { lines })
    }

    pub fn lines(&self) -> &[Line; 4] {
        &self.lines
    }
}

/// All-or-nothing detection result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DetectionOutcome {
    Found(TableBoundary),
    /// The resolution ladder was exhausted without exactly four clusters.
    NotFound,
}

impl DetectionOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, DetectionOutcome::Found(_))
    }

    pub fn boundary(&self) -> Option<&TableBoundary> {
        match self {
            DetectionOutcome::Found(boundary) => Some(boundary),
            DetectionOutcome::NotFound => None,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResult {
    pub outcome: DetectionOutcome,
    /// Boundary lines clipped to the image, in boundary order. Lines that miss
    /// the image are skipped.
    pub segments: Vec<Segment>,
    /// Offset resolution at which the search converged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rho_resolution: Option<f32>,
    /// Ladder rungs tried.
    pub attempts: usize,
    pub latency_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_requires_exactly_four_lines() {
        let l = Line::new(1.0, 0.0);
        assert!(TableBoundary::from_lines(&[l; 3]).is_none());
        assert!(TableBoundary::from_lines(&[l; 5]).is_none());
        assert!(TableBoundary::from_lines(&[l; 4]).is_some());
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(DetectionOutcome::NotFound).unwrap();
        assert_eq!(json["status"], "notFound");
        let found = DetectionOutcome::Found(TableBoundary::new([Line::new(1.0, 0.0); 4]));
        let json = serde_json::to_value(found).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["lines"].as_array().map(Vec::len), Some(4));
    }
}
