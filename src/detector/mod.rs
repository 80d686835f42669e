//! Table detector orchestrating mask → edges → resolution search.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the [`TableDetector`] implementation.
//! - [`search`] – the resolution-ladder state machine.
//!
//! Key Ideas
//! - The line detector is only ever varied along one axis, its offset bin
//!   width. Everything downstream of it (normalize, cluster, select) is pure.
//! - Convergence means exactly four clusters; anything else moves one rung up
//!   the ladder, and the ladder is finite.

pub mod params;
mod pipeline;
pub mod search;

pub use params::{EdgeParams, MaskParams, SearchParams, TableParams};
pub use pipeline::{boundary_segments, TableDetector};
pub use search::{ResolutionSearch, SearchState, SearchTrace};
