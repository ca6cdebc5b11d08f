//! Packed watch-list entries used by a CDCL SAT solver's unit propagation.
#[macro_use]
mod macros;
/// Watch records, occurrence pairs and watch-list management
pub mod cdb;
/// Configuration for the `splw` binary
pub mod config;
/// Plumping layer.
pub mod types;
