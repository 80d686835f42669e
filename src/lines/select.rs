use super::cluster::Cluster;
use super::geometry::distance_to_point;
use super::line::Line;
use serde::Serialize;

/// The cluster member chosen to stand in for one physical edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Representative {
    pub line: Line,
    /// Position inside the cluster (0 is the seed).
    pub member: usize,
    /// Perpendicular distance from the reference point.
    pub distance: f32,
}

/// Picks the member closest to `reference` (center-relative coordinates, so
/// the image centre is `[0, 0]`). Ties keep the earliest member.
pub fn select_representative(cluster: &Cluster, reference: [f32; 2]) -> Representative {
    let seed = cluster.seed();
    let mut best = Representative {
        line: *seed,
        member: 0,
        distance: distance_to_point(seed, reference),
    };
    for (member, line) in cluster.lines().iter().enumerate().skip(1) {
        let distance = distance_to_point(line, reference);
        if distance < best.distance {
            best = Representative {
                line: *line,
                member,
                distance,
            };
        }
    }
    best
}

/// One representative per cluster, in cluster order.
pub fn select_representatives(clusters: &[Cluster], reference: [f32; 2]) -> Vec<Representative> {
    clusters
        .iter()
        .map(|c| select_representative(c, reference))
        .collect()
}
