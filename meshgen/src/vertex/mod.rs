//! Vertex layouts and the canonical vertex
//!
//! Generators compute every attribute into a [`CanonicalVertex`]. Target vertex types declare
//! which semantics they carry, and at which byte offsets, through [`VertexLayout`]; the
//! [`VertexAssembler`] projects the canonical record into the target.

mod assembler;
mod formats;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};

pub use assembler::VertexAssembler;
pub use formats::{
    VertexPos, VertexPosColor, VertexPosNormalColor, VertexPosNormalTangentTex, VertexPosNormalTex,
    VertexPosTex,
};

/// Attribute roles understood by the assembler
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Semantic {
    Position,
    Normal,
    Tangent,
    Color,
    TexCoord,
}

impl Semantic {
    /// All semantics, in canonical storage order
    pub const ALL: [Semantic; 5] = [
        Semantic::Position,
        Semantic::Normal,
        Semantic::Tangent,
        Semantic::Color,
        Semantic::TexCoord,
    ];

    /// Look up a semantic by its layout name (`"POSITION"`, `"TEXCOORD"`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "POSITION" => Some(Self::Position),
            "NORMAL" => Some(Self::Normal),
            "TANGENT" => Some(Self::Tangent),
            "COLOR" => Some(Self::Color),
            "TEXCOORD" => Some(Self::TexCoord),
            _ => None,
        }
    }

    /// Layout name of this semantic
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "POSITION",
            Self::Normal => "NORMAL",
            Self::Tangent => "TANGENT",
            Self::Color => "COLOR",
            Self::TexCoord => "TEXCOORD",
        }
    }

    /// Byte offset of this attribute inside [`CanonicalVertex`]
    pub const fn canonical_offset(self) -> usize {
        match self {
            Self::Position => 0,
            Self::Normal => 12,
            Self::Tangent => 24,
            Self::Color => 40,
            Self::TexCoord => 56,
        }
    }

    /// Size of this attribute in bytes
    pub const fn width(self) -> usize {
        match self {
            Self::Position | Self::Normal => 12,
            Self::Tangent | Self::Color => 16,
            Self::TexCoord => 8,
        }
    }
}

/// One entry of a vertex input layout: a semantic name and where it lives in the vertex
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputElement {
    pub semantic_name: &'static str,
    pub aligned_byte_offset: usize,
}

impl InputElement {
    pub const fn new(semantic_name: &'static str, aligned_byte_offset: usize) -> Self {
        Self {
            semantic_name,
            aligned_byte_offset,
        }
    }
}

/// A vertex record the generators can fill.
///
/// `INPUT_LAYOUT` lists the semantics this type stores. Bytes not covered by a declared
/// element are never written and keep their zeroed value.
pub trait VertexLayout: Pod + Send + Sync {
    /// Human-readable name for diagnostics
    const NAME: &'static str;

    /// Declared elements, in declaration order
    const INPUT_LAYOUT: &'static [InputElement];
}

/// Superset vertex every generator computes before projection.
///
/// Field order and widths are fixed: position at 0, normal at 12, tangent at 24, color at 40,
/// texcoord at 56 (64 bytes total).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CanonicalVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// xyz = tangent direction, w = bitangent handedness
    pub tangent: [f32; 4],
    pub color: [f32; 4],
    pub texcoord: [f32; 2],
}

impl CanonicalVertex {
    pub fn new(position: Vec3, normal: Vec3, tangent: Vec4, color: Vec4, texcoord: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            tangent: tangent.to_array(),
            color: color.to_array(),
            texcoord: texcoord.to_array(),
        }
    }
}

const _: () = assert!(std::mem::size_of::<CanonicalVertex>() == 64);
