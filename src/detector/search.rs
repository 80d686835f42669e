//! Resolution search over the line detector's offset discretization.
//!
//! Detector sensitivity depends on the offset bin width: fine bins split one
//! physical edge into many near-duplicate peaks (and admit spurious short
//! runs), coarse bins merge them. No single width suits every photo, so the
//! search walks a ladder of widths, clustering the candidates at each rung,
//! and stops at the first rung that yields exactly four clusters.
//!
//! The controller is an explicit state machine. [`ResolutionSearch::step`]
//! maps one state to the next without hidden mutation, which keeps the
//! termination bound (one step per rung) directly observable.

use super::params::SearchParams;
use crate::diagnostics::AttemptReport;
use crate::hough::LineDetector;
use crate::image::GrayImageU8;
use crate::lines::{cluster_lines, normalize_all, select_representatives, ClusterParams};
use crate::types::TableBoundary;
use log::{debug, info, warn};
use std::time::Instant;

/// Selection reference in center-relative coordinates: the image centre.
const CENTER_REFERENCE: [f32; 2] = [0.0, 0.0];

#[derive(Clone, Debug, PartialEq)]
pub enum SearchState {
    /// Rung `attempt` (zero-based) is next, at `rho_resolution`.
    Searching { attempt: usize, rho_resolution: f32 },
    /// Exactly four clusters were found.
    Converged {
        attempts: usize,
        rho_resolution: f32,
        boundary: TableBoundary,
    },
    /// Every rung was tried without finding four clusters.
    Exhausted { attempts: usize },
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchState::Searching { .. })
    }

    /// Rungs completed so far.
    pub fn attempts(&self) -> usize {
        match *self {
            SearchState::Searching { attempt, .. } => attempt,
            SearchState::Converged { attempts, .. } | SearchState::Exhausted { attempts } => {
                attempts
            }
        }
    }
}

/// Terminal state plus the per-rung reports that led to it.
#[derive(Clone, Debug)]
pub struct SearchTrace {
    pub state: SearchState,
    pub attempts: Vec<AttemptReport>,
}

#[derive(Clone, Debug)]
pub struct ResolutionSearch {
    params: SearchParams,
    clustering: ClusterParams,
    center: [f32; 2],
}

impl ResolutionSearch {
    /// `center` is the image centre in pixel coordinates; detector lines are
    /// re-expressed relative to it.
    pub fn new(params: SearchParams, clustering: ClusterParams, center: [f32; 2]) -> Self {
        Self {
            params,
            clustering,
            center,
        }
    }

    pub fn initial_state(&self) -> SearchState {
        if self.params.ladder_len() == 0 {
            SearchState::Exhausted { attempts: 0 }
        } else {
            SearchState::Searching {
                attempt: 0,
                rho_resolution: self.params.rho_resolution_at(0),
            }
        }
    }

    /// Runs one rung. Terminal states are returned unchanged with no report.
    pub fn step<D: LineDetector + ?Sized>(
        &self,
        state: SearchState,
        detector: &D,
        edges: &GrayImageU8,
    ) -> (SearchState, Option<AttemptReport>) {
        let (attempt, rho_resolution) = match state {
            SearchState::Searching {
                attempt,
                rho_resolution,
            } => (attempt, rho_resolution),
            terminal => return (terminal, None),
        };

        let t0 = Instant::now();
        let raw = detector.detect_lines(edges, &self.params.hough_params(rho_resolution));
        let lines = normalize_all(&raw, self.center);
        let clusters = cluster_lines(&lines, &self.clustering);
        let representatives = select_representatives(&clusters, CENTER_REFERENCE);

        let report = AttemptReport {
            attempt,
            rho_resolution,
            raw_lines: raw.len(),
            normalized_lines: lines.len(),
            cluster_sizes: clusters.iter().map(|c| c.lines().len()).collect(),
            representatives,
            elapsed_ms: t0.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "search: rung {} rho_res={:.2} raw={} clusters={:?}",
            attempt, rho_resolution, report.raw_lines, report.cluster_sizes
        );

        let attempts = attempt + 1;
        let next = match TableBoundary::from_lines(&report.representative_lines()) {
            Some(boundary) => SearchState::Converged {
                attempts,
                rho_resolution,
                boundary,
            },
            None if attempts >= self.params.ladder_len() => SearchState::Exhausted { attempts },
            None => SearchState::Searching {
                attempt: attempts,
                rho_resolution: self.params.rho_resolution_at(attempts),
            },
        };
        (next, Some(report))
    }

    /// Steps from the initial state until a terminal state is reached. Takes
    /// at most `ladder_len` steps.
    pub fn run<D: LineDetector + ?Sized>(&self, detector: &D, edges: &GrayImageU8) -> SearchTrace {
        let mut state = self.initial_state();
        let mut attempts = Vec::with_capacity(self.params.ladder_len().min(64));
        while !state.is_terminal() {
            let (next, report) = self.step(state, detector, edges);
            attempts.extend(report);
            state = next;
        }
        match &state {
            SearchState::Converged {
                attempts,
                rho_resolution,
                ..
            } => info!(
                "search: converged after {} rung(s) at rho_res={:.2}",
                attempts, rho_resolution
            ),
            SearchState::Exhausted { attempts } => warn!(
                "search: no four-edge clustering after {} rung(s) up to rho_res<{:.2}",
                attempts, self.params.max_rho_resolution
            ),
            SearchState::Searching { .. } => {}
        }
        SearchTrace { state, attempts }
    }
}
