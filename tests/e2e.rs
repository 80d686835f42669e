mod common;

use common::synthetic_image::table_rgb;
use std::f32::consts::{FRAC_PI_2, PI};
use table_detector::hough::HoughParams;
use table_detector::image::{GrayImageU8, RgbImageU8};
use table_detector::lines::{Line, Segment};
use table_detector::{DetectionOutcome, RawLine, TableDetector, TableParams};

/// True when `line` is `(offset, angle)` up to `tol` pixels and 2°.
fn matches(line: &Line, offset: f32, angle: f32, tol: f32) -> bool {
    (line.angle - angle).abs() <= 2f32.to_radians() && (line.offset - offset).abs() <= tol
}

fn assert_inside(segments: &[Segment], width: usize, height: usize) {
    let (xm, ym) = ((width - 1) as f32, (height - 1) as f32);
    for seg in segments {
        for p in [seg.p0, seg.p1] {
            assert!(
                (0.0..=xm).contains(&p[0]) && (0.0..=ym).contains(&p[1]),
                "endpoint {p:?} outside {width}x{height}"
            );
        }
    }
}

#[test]
fn synthetic_table_photo_converges_to_rectangle_edges() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (width, height) = (320usize, 240usize);
    let image = table_rgb(width, height, (40, 280), (30, 210));

    // A straight edge also puts ~100 votes into the 1° bins either side of
    // it. On the 179° side those form their own cluster, so keep the vote
    // threshold above that spill.
    let mut params = TableParams::default();
    params.search.vote_threshold = 150;
    let detector = TableDetector::new(params);
    let report = detector.process(&image.as_view());

    let boundary = match &report.result.outcome {
        DetectionOutcome::Found(boundary) => *boundary,
        DetectionOutcome::NotFound => panic!(
            "expected the table, attempts: {:?}",
            report
                .trace
                .attempts
                .iter()
                .map(|a| (a.rho_resolution, a.cluster_sizes.clone()))
                .collect::<Vec<_>>()
        ),
    };

    // Rectangle edges relative to the centre (160, 120).
    let expected = [
        (-120.0, 0.0),
        (120.0, 0.0),
        (-90.0, FRAC_PI_2),
        (90.0, FRAC_PI_2),
    ];
    for (offset, angle) in expected {
        assert!(
            boundary
                .lines()
                .iter()
                .any(|l| matches(l, offset, angle, 3.0)),
            "no boundary line near offset={offset} angle={angle}: {:?}",
            boundary.lines()
        );
    }
    for line in boundary.lines() {
        assert!((0.0..PI).contains(&line.angle));
    }
    assert_eq!(report.result.segments.len(), 4);
    assert_inside(&report.result.segments, width, height);
    assert!(report.trace.mask_pixels > 0);
    assert!(report.trace.edge_pixels > 0);
}

/// Raw candidates for the edge `x·cos a + y·sin a = offset` (center-relative),
/// expressed from the top-left corner the way a Hough detector reports them.
fn raw_for(offset: f32, angle: f32, center: [f32; 2], votes: u32) -> RawLine {
    RawLine {
        rho: offset + center[0] * angle.cos() + center[1] * angle.sin(),
        theta: angle,
        votes,
    }
}

fn jittered_edges(_: &GrayImageU8, _: &HoughParams) -> Vec<RawLine> {
    let center = [600.0, 600.0];
    let jitter = [(0.0, 0.0), (3.0, 0.4), (-2.0, 0.5), (6.0, 0.2), (-4.0, 0.3)];
    let mut lines = Vec::new();
    for (rank, (d_offset, d_angle_deg)) in jitter.into_iter().enumerate() {
        let votes = 500 - rank as u32 * 50;
        let d_angle = f32::to_radians(d_angle_deg);
        lines.push(raw_for(5.0 + d_offset, d_angle, center, votes));
        lines.push(raw_for(495.0 + d_offset, d_angle, center, votes));
        lines.push(raw_for(5.0 + d_offset, FRAC_PI_2 + d_angle, center, votes));
        lines.push(raw_for(495.0 + d_offset, FRAC_PI_2 + d_angle, center, votes));
    }
    lines
}

#[test]
fn jittered_duplicates_reduce_to_four_canonical_edges() {
    let (width, height) = (1200usize, 1200usize);
    let image = RgbImageU8::filled(width, height, [0, 0, 0]);
    let detector =
        TableDetector::new(TableParams::default()).with_line_detector(jittered_edges);
    let report = detector.process(&image.as_view());

    let boundary = report
        .result
        .outcome
        .boundary()
        .copied()
        .expect("four edges");
    assert_eq!(report.result.attempts, 1);
    assert_eq!(report.trace.attempts[0].cluster_sizes, vec![5, 5, 5, 5]);

    for (offset, angle) in [(5.0, 0.0), (495.0, 0.0), (5.0, FRAC_PI_2), (495.0, FRAC_PI_2)] {
        assert!(
            boundary
                .lines()
                .iter()
                .any(|l| matches(l, offset, angle, 5.0)),
            "no edge near offset={offset} angle={angle}: {:?}",
            boundary.lines()
        );
    }
    for line in boundary.lines() {
        assert!((0.0..PI).contains(&line.angle));
    }
    assert_eq!(report.result.segments.len(), 4);
    assert_inside(&report.result.segments, width, height);
}

fn three_edges(_: &GrayImageU8, _: &HoughParams) -> Vec<RawLine> {
    let center = [100.0, 100.0];
    vec![
        raw_for(-60.0, 0.0, center, 300),
        raw_for(60.0, 0.0, center, 300),
        raw_for(-60.0, FRAC_PI_2, center, 300),
    ]
}

#[test]
fn three_edges_exhaust_the_ladder() {
    let image = RgbImageU8::filled(200, 200, [0, 0, 0]);
    let detector = TableDetector::new(TableParams::default()).with_line_detector(three_edges);
    let report = detector.process(&image.as_view());

    assert_eq!(report.result.outcome, DetectionOutcome::NotFound);
    assert_eq!(report.result.attempts, 9);
    let rungs: Vec<f32> = report
        .trace
        .attempts
        .iter()
        .map(|a| a.rho_resolution)
        .collect();
    assert_eq!(rungs, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert!(report.trace.attempts.iter().all(|a| a.cluster_count() == 3));
}

fn edge_seen_from_both_sides_of_the_seam(_: &GrayImageU8, _: &HoughParams) -> Vec<RawLine> {
    let center = [100.0, 100.0];
    vec![
        raw_for(-60.0, 0.01, center, 300),
        raw_for(60.0, 0.0, center, 300),
        raw_for(-60.0, FRAC_PI_2, center, 300),
        raw_for(60.0, FRAC_PI_2, center, 300),
        // The left edge again, reported with the opposite normal at 179.4°.
        raw_for(60.0, PI - 0.01, center, 200),
    ]
}

#[test]
fn seam_duplicates_are_separate_clusters() {
    let image = RgbImageU8::filled(200, 200, [0, 0, 0]);
    let detector = TableDetector::new(TableParams::default())
        .with_line_detector(edge_seen_from_both_sides_of_the_seam);
    let report = detector.process(&image.as_view());

    assert_eq!(report.result.outcome, DetectionOutcome::NotFound);
    assert!(report
        .trace
        .attempts
        .iter()
        .all(|a| a.cluster_sizes == vec![1, 1, 1, 1, 1]));
}
