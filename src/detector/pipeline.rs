//! Detector pipeline driving table-boundary detection end-to-end.
//!
//! The [`TableDetector`] takes an RGB photo and returns the four boundary
//! lines together with a trace of every stage. Internally it masks the table
//! cloth, extracts edges from the mask, and hands the edge map to the
//! [`ResolutionSearch`](super::search::ResolutionSearch), which varies the
//! line detector's offset resolution until the candidates cluster into
//! exactly four edges.
//!
//! Typical usage:
//! ```no_run
//! use table_detector::{TableDetector, TableParams};
//! use table_detector::image::RgbImageU8;
//!
//! # fn example(image: RgbImageU8) {
//! let detector = TableDetector::new(TableParams::default());
//! let report = detector.process(&image.as_view());
//! if let Some(boundary) = report.result.outcome.boundary() {
//!     println!("edges: {:?}", boundary.lines());
//! }
//! # }
//! ```
use super::params::TableParams;
use super::search::{ResolutionSearch, SearchState, SearchTrace};
use crate::circles::CircleDetector;
use crate::diagnostics::{DetectionReport, InputDescriptor, PipelineTrace, TimingBreakdown};
use crate::edges::EdgeDetector;
use crate::hough::{HoughLineDetector, LineDetector};
use crate::image::{GrayImageU8, ImageRgb8};
use crate::lines::{line_to_endpoints, Segment};
use crate::mask::ForegroundMask;
use crate::render::DebugRenderer;
use crate::types::{DetectionOutcome, TableBoundary, TableResult};
use log::debug;
use std::time::Instant;

/// Table detector wiring the collaborators around the resolution search.
///
/// Every collaborator is replaceable; the defaults come from [`TableParams`].
pub struct TableDetector {
    params: TableParams,
    mask: Box<dyn ForegroundMask>,
    edges: Box<dyn EdgeDetector>,
    lines: Box<dyn LineDetector>,
    circles: Option<Box<dyn CircleDetector>>,
    renderer: Option<Box<dyn DebugRenderer>>,
}

impl TableDetector {
    /// Create a detector with the default mask, Canny and Hough stages.
    pub fn new(params: TableParams) -> Self {
        Self {
            mask: Box::new(params.mask.to_mask()),
            edges: Box::new(params.edges.to_detector()),
            lines: Box::new(HoughLineDetector),
            circles: None,
            renderer: None,
            params,
        }
    }

    pub fn with_mask<M: ForegroundMask + 'static>(mut self, mask: M) -> Self {
        self.mask = Box::new(mask);
        self
    }

    pub fn with_edge_detector<E: EdgeDetector + 'static>(mut self, edges: E) -> Self {
        self.edges = Box::new(edges);
        self
    }

    pub fn with_line_detector<D: LineDetector + 'static>(mut self, lines: D) -> Self {
        self.lines = Box::new(lines);
        self
    }

    /// Circles are reported in the trace only.
    pub fn with_circle_detector<C: CircleDetector + 'static>(mut self, circles: C) -> Self {
        self.circles = Some(Box::new(circles));
        self
    }

    pub fn with_renderer<R: DebugRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn params(&self) -> &TableParams {
        &self.params
    }

    /// Run the resolution search on a precomputed edge map.
    pub fn search_edges(&self, edges: &GrayImageU8, center: [f32; 2]) -> SearchTrace {
        ResolutionSearch::new(self.params.search, self.params.clustering, center)
            .run(self.lines.as_ref(), edges)
    }

    /// Run the full pipeline and return the result with its trace.
    pub fn process(&self, image: &ImageRgb8<'_>) -> DetectionReport {
        let (width, height) = (image.w, image.h);
        let center = image.center();
        debug!("TableDetector::process start w={} h={}", width, height);
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let mask = timings.time("mask", || self.mask.mask(image));
        if let Some(renderer) = &self.renderer {
            renderer.render_mask(&mask);
        }

        let edges = timings.time("edges", || self.edges.detect_edges(&mask));
        if let Some(renderer) = &self.renderer {
            renderer.render_edges(&edges);
        }
        let (mask_pixels, edge_pixels) = (mask.count_nonzero(), edges.count_nonzero());
        debug!(
            "TableDetector: mask={} px edges={} px",
            mask_pixels, edge_pixels
        );

        let search = timings.time("search", || self.search_edges(&edges, center));

        let attempts = search.state.attempts();
        let (outcome, rho_resolution) = match search.state {
            SearchState::Converged {
                boundary,
                rho_resolution,
                ..
            } => (DetectionOutcome::Found(boundary), Some(rho_resolution)),
            _ => (DetectionOutcome::NotFound, None),
        };
        let segments = outcome
            .boundary()
            .map(|b| boundary_segments(b, width, height))
            .unwrap_or_default();

        let circles = match &self.circles {
            Some(detector) => timings.time("circles", || detector.detect_circles(image, &mask)),
            None => Vec::new(),
        };
        if let Some(renderer) = &self.renderer {
            renderer.render_overlay(image, &segments, &circles);
        }

        let latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        timings.total_ms = latency_ms;

        DetectionReport {
            result: TableResult {
                outcome,
                segments,
                rho_resolution,
                attempts,
                latency_ms,
            },
            trace: PipelineTrace {
                input: InputDescriptor {
                    width,
                    height,
                    center,
                },
                timings,
                mask_pixels,
                edge_pixels,
                attempts: search.attempts,
                circles,
            },
        }
    }
}

/// Boundary lines clipped to the image, skipping lines that miss it.
pub fn boundary_segments(boundary: &TableBoundary, width: usize, height: usize) -> Vec<Segment> {
    boundary
        .lines()
        .iter()
        .filter_map(|line| line_to_endpoints(line, width, height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circles::Circle;
    use crate::hough::{HoughParams, RawLine};
    use crate::image::RgbImageU8;
    use std::cell::RefCell;
    use std::f32::consts::FRAC_PI_2;
    use std::rc::Rc;

    /// Mask that marks everything; the stub line detector ignores it anyway.
    struct FullMask;

    impl ForegroundMask for FullMask {
        fn mask(&self, image: &ImageRgb8<'_>) -> GrayImageU8 {
            GrayImageU8::from_raw(image.w, image.h, vec![255; image.w * image.h])
                .unwrap_or_else(|| GrayImageU8::new(image.w, image.h))
        }
    }

    struct FixedCircles;

    impl CircleDetector for FixedCircles {
        fn detect_circles(&self, _: &ImageRgb8<'_>, _: &GrayImageU8) -> Vec<Circle> {
            vec![Circle {
                center: [10.0, 10.0],
                radius: 4.0,
            }]
        }
    }

    #[derive(Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl DebugRenderer for Recorder {
        fn render_mask(&self, _: &GrayImageU8) {
            self.calls.borrow_mut().push("mask");
        }
        fn render_edges(&self, _: &GrayImageU8) {
            self.calls.borrow_mut().push("edges");
        }
        fn render_overlay(&self, _: &ImageRgb8<'_>, segments: &[Segment], _: &[Circle]) {
            assert_eq!(segments.len(), 4);
            self.calls.borrow_mut().push("overlay");
        }
    }

    fn rectangle_lines(_: &GrayImageU8, _: &HoughParams) -> Vec<RawLine> {
        // Rectangle x ∈ {20, 180}, y ∈ {30, 120} in a 200×150 image.
        [(20.0, 0.0), (180.0, 0.0), (30.0, FRAC_PI_2), (120.0, FRAC_PI_2)]
            .into_iter()
            .map(|(rho, theta)| RawLine {
                rho,
                theta,
                votes: 150,
            })
            .collect()
    }

    #[test]
    fn stub_detector_yields_found_outcome_with_segments() {
        let image = RgbImageU8::filled(200, 150, [0, 0, 0]);
        let calls = Rc::new(RefCell::new(Vec::new()));
        let detector = TableDetector::new(TableParams::default())
            .with_mask(FullMask)
            .with_line_detector(rectangle_lines)
            .with_circle_detector(FixedCircles)
            .with_renderer(Recorder {
                calls: Rc::clone(&calls),
            });
        let report = detector.process(&image.as_view());

        assert!(report.result.outcome.is_found());
        assert_eq!(report.result.attempts, 1);
        assert_eq!(report.result.rho_resolution, Some(1.0));
        assert_eq!(report.result.segments.len(), 4);
        let left = report.result.segments[0];
        assert!((left.p0[0] - 20.0).abs() < 1e-3 && (left.p1[0] - 20.0).abs() < 1e-3);
        assert_eq!(report.trace.circles.len(), 1);
        assert!(report.trace.timings.stage_ms("search").is_some());
        assert_eq!(*calls.borrow(), vec!["mask", "edges", "overlay"]);
    }

    #[test]
    fn blank_image_is_not_found() {
        let image = RgbImageU8::filled(64, 48, [0, 0, 0]);
        let detector = TableDetector::new(TableParams::default());
        let report = detector.process(&image.as_view());
        assert_eq!(report.result.outcome, DetectionOutcome::NotFound);
        assert!(report.result.segments.is_empty());
        assert_eq!(report.result.rho_resolution, None);
        assert_eq!(report.result.attempts, 9);
        assert_eq!(report.trace.attempts.len(), 9);
        assert_eq!(report.trace.mask_pixels, 0);
    }
}
