//! Diagnostics data model returned alongside the detection result.
//!
//! `DetectionReport` bundles the caller-facing [`TableResult`] with a
//! `PipelineTrace` describing the mask, edge map and every rung of the
//! resolution ladder that was tried.

pub mod search;
pub mod timing;

pub use search::AttemptReport;
pub use timing::{StageTiming, TimingBreakdown};

use crate::circles::Circle;
use crate::types::TableResult;
use serde::Serialize;

/// Result produced by [`TableDetector::process`](crate::TableDetector::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub result: TableResult,
    pub trace: PipelineTrace,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub mask_pixels: usize,
    pub edge_pixels: usize,
    pub attempts: Vec<AttemptReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub circles: Vec<Circle>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    /// Reference point for center-relative offsets, in pixels.
    pub center: [f32; 2],
}
