//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for cube construction and named-operation dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// a cube state is exactly 54 facets, no more, no less
    #[error("a cube state needs exactly 54 facets, got {0}")]
    InvalidLength(usize),
    /// a character in a textual cube layout was not one of the six colors
    #[error("unrecognized facet label {0:?}")]
    InvalidLabel(char),
    /// an operation identifier was not in the recognized move set
    #[error("unknown operation {0:?}")]
    UnknownOperation(String),
}
