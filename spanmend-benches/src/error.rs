//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` and the Criterion entry
//! points turn them into a single panic message.

use crate::source::SyntheticError;
use spanmend_core::{GraphError, ReplacementError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated edges were rejected by the graph model.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Planner configuration or a removal scenario failed.
    #[error("replacement planning failed: {0}")]
    Replacement(#[from] ReplacementError),
}
