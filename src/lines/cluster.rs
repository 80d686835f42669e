//! First-fit, seed-anchored clustering of normalized lines.
//!
//! Each cluster is anchored on its first line (the seed). A candidate joins
//! the first cluster, in creation order, whose seed lies within both the
//! offset and the angle tolerance; otherwise it seeds a new cluster. There is
//! no merge or re-assignment pass, so the result depends on input order and
//! membership is not transitive: two members may be further apart than the
//! tolerance as long as each is close to the seed. Detectors emit their
//! strongest lines first, which keeps clusters tight around the strongest
//! detection of each edge.

use super::line::Line;
use serde::{Deserialize, Serialize};

/// Tolerances used to decide whether two lines are re-detections of one edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterParams {
    /// Maximum |Δoffset| (exclusive), in pixels.
    pub rho_tolerance: f32,
    /// Maximum |Δangle| (exclusive), in degrees.
    pub theta_tolerance_deg: f32,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            rho_tolerance: 80.0,
            theta_tolerance_deg: 5.0,
        }
    }
}

impl ClusterParams {
    #[inline]
    pub fn theta_tolerance_rad(&self) -> f32 {
        self.theta_tolerance_deg.to_radians()
    }
}

/// Non-empty group of lines anchored on its seed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    lines: Vec<Line>,
    source_indices: Vec<usize>,
}

impl Cluster {
    fn seeded(index: usize, seed: Line) -> Self {
        Self {
            lines: vec![seed],
            source_indices: vec![index],
        }
    }

    /// First line added; all membership tests compare against it.
    #[inline]
    pub fn seed(&self) -> &Line {
        &self.lines[0]
    }

    /// Members in insertion order, seed first.
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Position of every member in the clustered input slice.
    #[inline]
    pub fn source_indices(&self) -> &[usize] {
        &self.source_indices
    }

    /// Seed-anchored membership test on the canonical values. Angles are not
    /// wrapped, so lines just either side of the `[0, π)` seam stay apart.
    pub fn accepts(&self, line: &Line, rho_tolerance: f32, theta_tolerance: f32) -> bool {
        let seed = self.seed();
        let d_offset = (line.offset - seed.offset).abs();
        let d_angle = (line.angle - seed.angle).abs();
        d_offset < rho_tolerance && d_angle < theta_tolerance
    }

    fn push(&mut self, index: usize, line: Line) {
        self.lines.push(line);
        self.source_indices.push(index);
    }
}

/// Partitions `lines` into clusters. Every input line lands in exactly one
/// cluster; an empty input yields no clusters.
pub fn cluster_lines(lines: &[Line], params: &ClusterParams) -> Vec<Cluster> {
    let theta_tolerance = params.theta_tolerance_rad();
    let mut clusters: Vec<Cluster> = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        match clusters
            .iter_mut()
            .find(|c| c.accepts(line, params.rho_tolerance, theta_tolerance))
        {
            Some(cluster) => cluster.push(index, *line),
            None => clusters.push(Cluster::seeded(index, *line)),
        }
    }
    clusters
}
