//! Offset/angle line model and the reduction from raw candidates to one line
//! per physical edge.
//!
//! - [`line`]: canonical center-relative `(offset, angle)` form.
//! - [`cluster`]: first-fit grouping against each cluster's seed.
//! - [`select`]: closest-to-center representative per cluster.
//! - [`geometry`]: endpoint conversion and point-to-line distance.

pub mod cluster;
pub mod geometry;
pub mod line;
pub mod select;

pub use cluster::{cluster_lines, Cluster, ClusterParams};
pub use geometry::{line_to_endpoints, point_line_distance, Segment};
pub use line::{normalize_all, normalize_raw, Line};
pub use select::{select_representative, select_representatives, Representative};
