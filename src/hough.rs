//! Standard Hough line detector over a binary edge map.
//!
//! The detector reports lines in its own convention: `rho` is the signed
//! distance from the top-left image corner and `theta ∈ [0, π)` is the angle
//! of the line normal, so that `x·cos θ + y·sin θ = rho`. The line normalizer
//! re-expresses them relative to the image centre.
//!
//! The search controller drives the detector repeatedly, varying only
//! [`HoughParams::rho_resolution`].

use crate::image::GrayImageU8;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Candidate line as reported by a [`LineDetector`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawLine {
    pub rho: f32,
    pub theta: f32,
    pub votes: u32,
}

/// Accumulator discretization and acceptance threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoughParams {
    /// Offset bin width in pixels.
    pub rho_resolution: f32,
    /// Angle bin width in radians.
    pub theta_resolution: f32,
    /// Minimum votes for a cell to be reported.
    pub vote_threshold: u32,
}

impl HoughParams {
    fn is_valid(&self) -> bool {
        self.rho_resolution.is_finite()
            && self.rho_resolution > 0.0
            && self.theta_resolution.is_finite()
            && self.theta_resolution > 0.0
    }
}

/// Produces candidate lines from an edge map.
pub trait LineDetector {
    fn detect_lines(&self, edges: &GrayImageU8, params: &HoughParams) -> Vec<RawLine>;
}

impl<F> LineDetector for F
where
    F: Fn(&GrayImageU8, &HoughParams) -> Vec<RawLine>,
{
    fn detect_lines(&self, edges: &GrayImageU8, params: &HoughParams) -> Vec<RawLine> {
        self(edges, params)
    }
}

/// Accumulator-based detector: every edge pixel votes once per angle bin,
/// cells at or above the threshold that are 3×3 local maxima are reported,
/// strongest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoughLineDetector;

struct TrigTables {
    cos: Vec<f32>,
    sin: Vec<f32>,
}

impl TrigTables {
    fn new(theta_resolution: f32) -> Self {
        let count = ((PI / theta_resolution).round() as usize).max(1);
        let (cos, sin) = (0..count)
            .map(|i| {
                let (s, c) = (i as f32 * theta_resolution).sin_cos();
                (c, s)
            })
            .unzip();
        Self { cos, sin }
    }

    fn len(&self) -> usize {
        self.cos.len()
    }
}

impl LineDetector for HoughLineDetector {
    fn detect_lines(&self, edges: &GrayImageU8, params: &HoughParams) -> Vec<RawLine> {
        if !params.is_valid() || edges.w == 0 || edges.h == 0 {
            return Vec::new();
        }
        let points = edges.nonzero_points();
        if points.is_empty() {
            return Vec::new();
        }

        let tables = TrigTables::new(params.theta_resolution);
        let num_thetas = tables.len();
        let max_rho = ((edges.w * edges.w + edges.h * edges.h) as f32).sqrt();
        let num_rhos = (2.0 * max_rho / params.rho_resolution).round() as usize + 1;

        // Theta-major layout: each angle row is filled independently.
        let mut accumulator = vec![0u32; num_thetas * num_rhos];
        accumulator
            .par_chunks_mut(num_rhos)
            .zip(tables.cos.par_iter().zip(tables.sin.par_iter()))
            .for_each(|(row, (&c, &s))| {
                for p in &points {
                    let rho = p[0] * c + p[1] * s;
                    let idx = ((rho + max_rho) / params.rho_resolution).round();
                    if idx >= 0.0 && (idx as usize) < num_rhos {
                        row[idx as usize] += 1;
                    }
                }
            });

        let mut lines = Vec::new();
        for t in 0..num_thetas {
            for r in 0..num_rhos {
                let votes = accumulator[t * num_rhos + r];
                if votes >= params.vote_threshold
                    && votes > 0
                    && is_local_maximum(&accumulator, t, r, num_thetas, num_rhos)
                {
                    lines.push(RawLine {
                        rho: r as f32 * params.rho_resolution - max_rho,
                        theta: t as f32 * params.theta_resolution,
                        votes,
                    });
                }
            }
        }
        lines.sort_by(|a, b| b.votes.cmp(&a.votes));

        debug!(
            "hough: {} edge px, {}x{} cells (rho_res={:.2}), {} lines >= {} votes",
            points.len(),
            num_thetas,
            num_rhos,
            params.rho_resolution,
            lines.len(),
            params.vote_threshold
        );
        lines
    }
}

fn is_local_maximum(
    accumulator: &[u32],
    t: usize,
    r: usize,
    num_thetas: usize,
    num_rhos: usize,
) -> bool {
    let center = accumulator[t * num_rhos + r];
    for dt in -1i64..=1 {
        for dr in -1i64..=1 {
            if dt == 0 && dr == 0 {
                continue;
            }
            let nt = t as i64 + dt;
            let nr = r as i64 + dr;
            if nt < 0 || nr < 0 || nt >= num_thetas as i64 || nr >= num_rhos as i64 {
                continue;
            }
            if accumulator[nt as usize * num_rhos + nr as usize] > center {
                return false;
            }
        }
    }
    true
}
