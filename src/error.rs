use std::fmt;

use thiserror::Error;

/// Which end of an edge record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSide {
    Source,
    Dest,
}

impl fmt::Display for EndpointSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointSide::Source => f.write_str("source"),
            EndpointSide::Dest => f.write_str("dest"),
        }
    }
}

/// Structural input failures. Any of these aborts the whole layout pass;
/// no partial geometry is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Edge weight was negative, NaN or infinite. Zero is valid.
    #[error("edge {index} ({src} -> {dest}): invalid weight {weight}")]
    InvalidWeight {
        index: usize,
        src: String,
        dest: String,
        weight: f32,
    },

    /// Edge referenced an empty node id.
    #[error("edge {index}: {side} id is empty")]
    UnresolvedReference { index: usize, side: EndpointSide },

    /// Strict layering found a cycle in the flow graph.
    #[error("flow graph has a cycle through node `{node}`")]
    CyclicGraph { node: String },
}
