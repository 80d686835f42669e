//! Parameter types configuring the detector stages.
//!
//! Defaults follow the values the pipeline was tuned with on overhead pool
//! table photos: a blue-grey cloth colour, Canny thresholds of 100/200 on the
//! binary mask, and an offset-resolution ladder from 1 px up to 10 px.

use crate::edges::CannyEdgeDetector;
use crate::hough::HoughParams;
use crate::lines::ClusterParams;
use crate::mask::ColorDistanceMask;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableParams {
    pub mask: MaskParams,
    pub edges: EdgeParams,
    pub search: SearchParams,
    pub clustering: ClusterParams,
}

impl TableParams {
    /// Rejects values that would make a stage meaningless (non-finite or
    /// non-positive tolerances, an inverted ladder).
    pub fn validate(&self) -> Result<(), String> {
        positive("mask.threshold", self.mask.threshold)?;
        positive("edges.low_threshold", self.edges.low_threshold)?;
        positive("edges.high_threshold", self.edges.high_threshold)?;
        if self.edges.low_threshold > self.edges.high_threshold {
            return Err(format!(
                "edges.low_threshold ({}) exceeds edges.high_threshold ({})",
                self.edges.low_threshold, self.edges.high_threshold
            ));
        }
        positive("search.initial_rho_resolution", self.search.initial_rho_resolution)?;
        positive("search.rho_step", self.search.rho_step)?;
        positive("search.max_rho_resolution", self.search.max_rho_resolution)?;
        positive("search.theta_resolution_deg", self.search.theta_resolution_deg)?;
        if self.search.max_rho_resolution <= self.search.initial_rho_resolution {
            return Err(format!(
                "search.max_rho_resolution ({}) must exceed search.initial_rho_resolution ({})",
                self.search.max_rho_resolution, self.search.initial_rho_resolution
            ));
        }
        positive("clustering.rho_tolerance", self.clustering.rho_tolerance)?;
        positive("clustering.theta_tolerance_deg", self.clustering.theta_tolerance_deg)?;
        Ok(())
    }
}

fn positive(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{name} must be a positive finite number, got {value}"))
    }
}

/// Colour-distance foreground mask. Channel order is RGB.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskParams {
    pub target_rgb: [u8; 3],
    pub threshold: f32,
    pub blur: bool,
}

impl Default for MaskParams {
    fn default() -> Self {
        Self {
            target_rgb: [102, 131, 153],
            threshold: 65.0,
            blur: true,
        }
    }
}

impl MaskParams {
    pub fn to_mask(&self) -> ColorDistanceMask {
        ColorDistanceMask {
            target_rgb: self.target_rgb,
            threshold: self.threshold,
            blur: self.blur,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            low_threshold: 100.0,
            high_threshold: 200.0,
        }
    }
}

impl EdgeParams {
    pub fn to_detector(&self) -> CannyEdgeDetector {
        CannyEdgeDetector {
            low_threshold: self.low_threshold,
            high_threshold: self.high_threshold,
        }
    }
}

/// Resolution ladder and the fixed line-detector knobs.
///
/// Rung `k` uses offset resolution `initial_rho_resolution + k·rho_step`;
/// rungs stay strictly below `max_rho_resolution`, so the ladder has
/// `⌈(max − initial) / step⌉` rungs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub initial_rho_resolution: f32,
    pub rho_step: f32,
    pub max_rho_resolution: f32,
    pub theta_resolution_deg: f32,
    pub vote_threshold: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            initial_rho_resolution: 1.0,
            rho_step: 1.0,
            max_rho_resolution: 10.0,
            theta_resolution_deg: 1.0,
            vote_threshold: 100,
        }
    }
}

impl SearchParams {
    /// Number of rungs. Empty when the bounds are inverted or not finite;
    /// a single rung when the step cannot advance.
    pub fn ladder_len(&self) -> usize {
        let span = self.max_rho_resolution - self.initial_rho_resolution;
        if !span.is_finite() || span <= 0.0 {
            return 0;
        }
        if !self.rho_step.is_finite() || self.rho_step <= 0.0 {
            return 1;
        }
        (span / self.rho_step).ceil() as usize
    }

    #[inline]
    pub fn rho_resolution_at(&self, rung: usize) -> f32 {
        self.initial_rho_resolution + rung as f32 * self.rho_step
    }

    pub fn hough_params(&self, rho_resolution: f32) -> HoughParams {
        HoughParams {
            rho_resolution,
            theta_resolution: self.theta_resolution_deg.to_radians(),
            vote_threshold: self.vote_threshold,
        }
    }
}
