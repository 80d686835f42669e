#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod image;
pub mod lines;
pub mod types;

// Collaborator stages behind traits; the detector only sees the traits.
pub mod angle;
pub mod circles;
pub mod edges;
pub mod hough;
pub mod mask;
pub mod render;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{TableDetector, TableParams};
pub use crate::types::{DetectionOutcome, TableBoundary, TableResult};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// Extension seams.
pub use crate::circles::{Circle, CircleDetector};
pub use crate::edges::EdgeDetector;
pub use crate::hough::{LineDetector, RawLine};
pub use crate::mask::ForegroundMask;
pub use crate::render::DebugRenderer;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use table_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let image = RgbImageU8::filled(w, h, [102, 131, 153]);
///
/// let detector = TableDetector::new(TableParams::default());
/// let report = detector.process(&image.as_view());
/// println!(
///     "found={} latency_ms={:.3}",
///     report.result.outcome.is_found(),
///     report.result.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgb8, RgbImageU8};
    pub use crate::lines::Line;
    pub use crate::{DetectionOutcome, TableBoundary, TableDetector, TableParams};
}
