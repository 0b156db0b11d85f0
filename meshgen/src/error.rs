//! Error types for mesh generation
//!
//! Every error here is a configuration defect detected before any vertex is produced.

use thiserror::Error;

/// Error raised while preparing a mesh for generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A vertex layout declares a semantic the assembler has no source range for.
    #[error("{vertex_type}: unknown vertex semantic \"{semantic}\"")]
    UnknownSemantic {
        vertex_type: &'static str,
        semantic: &'static str,
    },

    /// A declared element does not fit inside its vertex record.
    #[error(
        "{vertex_type}: element {semantic} at offset {offset} ({width} bytes) overruns the {size}-byte vertex"
    )]
    ElementOutOfBounds {
        vertex_type: &'static str,
        semantic: &'static str,
        offset: usize,
        width: usize,
        size: usize,
    },

    /// Index buffers must be unsigned 16-bit or 32-bit.
    #[error("unsupported index type: {bytes} bytes, signed = {signed} (need unsigned, 2 or 4 bytes)")]
    UnsupportedIndexType { bytes: usize, signed: bool },

    /// The mesh needs more distinct vertices than the index type can address.
    #[error("mesh needs {vertex_count} vertices but the index type addresses at most {max}")]
    IndexOverflow { vertex_count: usize, max: usize },
}

/// Error raised while parsing a shape description.
#[derive(Debug, Error)]
pub enum ShapeConfigError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
