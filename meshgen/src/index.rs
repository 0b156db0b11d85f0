//! Index buffer element types
//!
//! Only unsigned 16-bit and 32-bit indices are accepted. The compile-time path is the sealed
//! [`IndexFormat`] trait; [`IndexWidth`] covers index types chosen at runtime.

use bytemuck::Pod;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Element type of a triangle-list index buffer.
///
/// Implemented for `u16` and `u32` only; the trait is sealed so no other width or signed
/// type can ever reach a generator.
pub trait IndexFormat: sealed::Sealed + Pod + Copy + Eq + Ord + std::fmt::Debug + Send + Sync {
    /// Matching runtime selector
    const WIDTH: IndexWidth;

    /// Number of distinct vertices addressable by this type
    const MAX_VERTICES: usize;

    /// Convert a vertex position. Callers guarantee `value < MAX_VERTICES`.
    fn from_u32(value: u32) -> Self;

    /// Widen back to `usize` (for bounds checks and lookups)
    fn to_usize(self) -> usize;
}

impl IndexFormat for u16 {
    const WIDTH: IndexWidth = IndexWidth::U16;
    const MAX_VERTICES: usize = u16::MAX as usize + 1;

    #[inline]
    fn from_u32(value: u32) -> Self {
        value as u16
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl IndexFormat for u32 {
    const WIDTH: IndexWidth = IndexWidth::U32;
    const MAX_VERTICES: usize = (u32::MAX as usize).saturating_add(1);

    #[inline]
    fn from_u32(value: u32) -> Self {
        value
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

/// Index width selected at runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexWidth {
    U16,
    U32,
}

impl IndexWidth {
    /// Validate a runtime index type description.
    ///
    /// Rejects anything that is not an unsigned 2- or 4-byte integer.
    pub fn from_layout(bytes: usize, signed: bool) -> Result<Self, GeometryError> {
        match (bytes, signed) {
            (2, false) => Ok(Self::U16),
            (4, false) => Ok(Self::U32),
            _ => Err(GeometryError::UnsupportedIndexType { bytes, signed }),
        }
    }

    /// Narrowest width that can address `vertex_count` vertices
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count <= u16::MAX_VERTICES {
            Self::U16
        } else {
            Self::U32
        }
    }

    /// Size of one index in bytes
    pub const fn bytes(self) -> usize {
        match self {
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }

    /// Number of distinct vertices addressable at this width
    pub const fn max_vertices(self) -> usize {
        match self {
            Self::U16 => u16::MAX_VERTICES,
            Self::U32 => u32::MAX_VERTICES,
        }
    }
}

/// Fail with [`GeometryError::IndexOverflow`] if `I` cannot address `vertex_count` vertices.
pub(crate) fn check_capacity<I: IndexFormat>(vertex_count: usize) -> Result<(), GeometryError> {
    if vertex_count > I::MAX_VERTICES {
        return Err(GeometryError::IndexOverflow {
            vertex_count,
            max: I::MAX_VERTICES,
        });
    }
    Ok(())
}
