//! Debug rendering of intermediate stages.
//!
//! Renderers observe the pipeline; they never influence the decision, and a
//! failing renderer only logs.

use crate::circles::Circle;
use crate::image::io::{save_gray_u8, save_rgb};
use crate::image::rgb::to_rgb_image;
use crate::image::{GrayImageU8, ImageRgb8};
use crate::lines::Segment;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_line_segment_mut};
use log::warn;
use std::path::PathBuf;

const BOUNDARY_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const CIRCLE_COLOR: Rgb<u8> = Rgb([255, 255, 0]);

/// Hooks invoked by [`TableDetector`](crate::TableDetector) as stages finish.
pub trait DebugRenderer {
    fn render_mask(&self, mask: &GrayImageU8);
    fn render_edges(&self, edges: &GrayImageU8);
    /// `segments` are the clipped boundary edges (empty when not found).
    fn render_overlay(&self, image: &ImageRgb8<'_>, segments: &[Segment], circles: &[Circle]);
}

/// Writes `mask.png`, `edges.png` and `overlay.png` into a directory.
#[derive(Clone, Debug)]
pub struct PngRenderer {
    dir: PathBuf,
}

impl PngRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn report(&self, what: &str, result: Result<(), String>) {
        if let Err(err) = result {
            warn!("PngRenderer: skipping {what}: {err}");
        }
    }
}

impl DebugRenderer for PngRenderer {
    fn render_mask(&self, mask: &GrayImageU8) {
        self.report("mask", save_gray_u8(mask, &self.dir.join("mask.png")));
    }

    fn render_edges(&self, edges: &GrayImageU8) {
        self.report("edges", save_gray_u8(edges, &self.dir.join("edges.png")));
    }

    fn render_overlay(&self, image: &ImageRgb8<'_>, segments: &[Segment], circles: &[Circle]) {
        let overlay = draw_overlay(image, segments, circles);
        self.report("overlay", save_rgb(&overlay, &self.dir.join("overlay.png")));
    }
}

/// Copy of `image` with boundary segments and circles drawn on top.
pub fn draw_overlay(image: &ImageRgb8<'_>, segments: &[Segment], circles: &[Circle]) -> RgbImage {
    let mut canvas = to_rgb_image(image);
    for seg in segments {
        draw_line_segment_mut(
            &mut canvas,
            (seg.p0[0], seg.p0[1]),
            (seg.p1[0], seg.p1[1]),
            BOUNDARY_COLOR,
        );
    }
    for circle in circles {
        draw_hollow_circle_mut(
            &mut canvas,
            (circle.center[0].round() as i32, circle.center[1].round() as i32),
            circle.radius.round().max(1.0) as i32,
            CIRCLE_COLOR,
        );
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RgbImageU8;

    #[test]
    fn overlay_draws_segments_without_touching_source() {
        let image = RgbImageU8::filled(40, 30, [0, 0, 0]);
        let seg = Segment {
            p0: [10.0, 0.0],
            p1: [10.0, 29.0],
        };
        let overlay = draw_overlay(&image.as_view(), &[seg], &[]);
        assert_eq!(overlay.dimensions(), (40, 30));
        assert_eq!(overlay.get_pixel(10, 15), &BOUNDARY_COLOR);
        assert_eq!(overlay.get_pixel(20, 15), &Rgb([0, 0, 0]));
        assert_eq!(image.as_view().get(10, 15), [0, 0, 0]);
    }

    #[test]
    fn png_renderer_writes_files() {
        let dir = std::env::temp_dir().join(format!("table_detector_render_{}", std::process::id()));
        let renderer = PngRenderer::new(&dir);
        let mask = GrayImageU8::new(8, 6);
        renderer.render_mask(&mask);
        let image = RgbImageU8::filled(8, 6, [10, 20, 30]);
        renderer.render_overlay(&image.as_view(), &[], &[]);
        renderer.render_edges(&mask);
        assert!(dir.join("mask.png").exists());
        assert!(dir.join("edges.png").exists());
        assert!(dir.join("overlay.png").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn png_renderer_survives_unwritable_directory() {
        // A regular file where the output directory should be.
        let blocker = std::env::temp_dir()
            .join(format!("table_detector_render_blocker_{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();
        let dir = blocker.join("debug");
        let renderer = PngRenderer::new(&dir);

        let mask = GrayImageU8::new(8, 6);
        renderer.render_mask(&mask);
        renderer.render_edges(&mask);
        let image = RgbImageU8::filled(8, 6, [10, 20, 30]);
        renderer.render_overlay(&image.as_view(), &[], &[]);

        assert!(!dir.join("mask.png").exists());
        assert!(!dir.join("edges.png").exists());
        assert!(!dir.join("overlay.png").exists());
        let _ = std::fs::remove_file(&blocker);
    }
}
