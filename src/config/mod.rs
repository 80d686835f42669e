//! JSON configuration for the command-line tool.

pub mod table;

pub use table::{load_config, OutputConfig, TableToolConfig};
